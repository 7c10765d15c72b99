//! Text rendering of view models with `minijinja` templates.

use super::{ListingView, ResultView, SessionView, ValidationView};
use minijinja::Environment;
use serde::Serialize;
use thiserror::Error;

const RESULT_TEMPLATE: &str = "result.txt";
const SESSION_TEMPLATE: &str = "session.txt";
const VALIDATION_TEMPLATE: &str = "validation.txt";
const LISTING_TEMPLATE: &str = "listing.txt";

const TEMPLATES: [(&str, &str); 5] = [
    ("rows.txt", ROWS_SOURCE),
    (RESULT_TEMPLATE, RESULT_SOURCE),
    (SESSION_TEMPLATE, SESSION_SOURCE),
    (VALIDATION_TEMPLATE, VALIDATION_SOURCE),
    (LISTING_TEMPLATE, LISTING_SOURCE),
];

const ROWS_SOURCE: &str = "\
{% macro ranked(rows) %}
Title | Score | Category | Days | Hours | Imp.
{% for row in rows %}
{{ row.title }} | {{ row.priority_score }} | [{{ row.category_class }}] {{ row.priority_category }} | {{ row.deadline_days }} | {{ row.estimated_hours }} | {{ row.importance }}
{% endfor %}
{% endmacro %}
{% macro rejected(rows) %}
Invalid ({{ rows|length }})
{% for row in rows %}
{{ row.label }} — {{ row.errors_json }}
{% endfor %}
{% endmacro %}
";

const RESULT_SOURCE: &str = "\
{% from \"rows.txt\" import ranked, rejected %}
{% if prioritized %}
{{ ranked(prioritized) }}
{% endif %}
{% if invalid %}
{{ rejected(invalid) }}
{% endif %}
";

const SESSION_SOURCE: &str = "\
Task Prioritization
{% for draft in drafts %}

Task {{ draft.row }}
{% for field in draft.fields %}
  {{ field.label }}: {{ field.value }}
{% endfor %}
{% endfor %}
{% if error %}

Error: {{ error }}
{% endif %}
{% if result %}

{% include \"result.txt\" %}
{% endif %}
";

const VALIDATION_SOURCE: &str = "\
{% from \"rows.txt\" import rejected %}
Valid: {{ valid_count }}
Invalid: {{ invalid_count }}
{% if invalid %}
{{ rejected(invalid) }}
{% endif %}
";

const LISTING_SOURCE: &str = "\
{% from \"rows.txt\" import ranked %}
Stored tasks: {{ count }}
{% if tasks %}
{{ ranked(tasks) }}
{% endif %}
";

/// Errors raised while rendering views.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A built-in template failed to compile.
    #[error("invalid template {template}: {reason}")]
    InvalidTemplate {
        /// Template name.
        template: &'static str,
        /// Compiler message.
        reason: String,
    },

    /// A template failed while rendering.
    #[error("failed to render {template}: {reason}")]
    Render {
        /// Template name.
        template: &'static str,
        /// Engine message.
        reason: String,
    },
}

/// Renders editor sessions and service documents as plain text.
#[derive(Debug)]
pub struct Renderer {
    environment: Environment<'static>,
}

impl Renderer {
    /// Compiles the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidTemplate`] when a template does not
    /// compile.
    pub fn new() -> Result<Self, RenderError> {
        let mut environment = Environment::new();
        environment.set_trim_blocks(true);
        environment.set_lstrip_blocks(true);
        for (name, source) in TEMPLATES {
            environment
                .add_template(name, source)
                .map_err(|error| RenderError::InvalidTemplate {
                    template: name,
                    reason: error.to_string(),
                })?;
        }
        Ok(Self { environment })
    }

    /// Renders the editor rows, the top-level error and the last result.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Render`] when rendering fails.
    pub fn render_session(&self, view: &SessionView) -> Result<String, RenderError> {
        let context = SessionContext {
            drafts: view.drafts.as_slice(),
            error: view.error.as_deref(),
            result: view.result.is_some(),
            prioritized: view
                .result
                .as_ref()
                .map_or(&[][..], |result| result.prioritized.as_slice()),
            invalid: view
                .result
                .as_ref()
                .map_or(&[][..], |result| result.invalid.as_slice()),
        };
        self.render(SESSION_TEMPLATE, &context)
    }

    /// Renders the results table and the invalid list.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Render`] when rendering fails.
    pub fn render_result(&self, view: &ResultView) -> Result<String, RenderError> {
        self.render(RESULT_TEMPLATE, view)
    }

    /// Renders a dry-run validation summary.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Render`] when rendering fails.
    pub fn render_validation(&self, view: &ValidationView) -> Result<String, RenderError> {
        self.render(VALIDATION_TEMPLATE, view)
    }

    /// Renders the stored task listing.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Render`] when rendering fails.
    pub fn render_listing(&self, view: &ListingView) -> Result<String, RenderError> {
        self.render(LISTING_TEMPLATE, view)
    }

    fn render<S: Serialize>(&self, name: &'static str, context: &S) -> Result<String, RenderError> {
        let render_failed = |error: minijinja::Error| RenderError::Render {
            template: name,
            reason: error.to_string(),
        };
        self.environment
            .get_template(name)
            .map_err(render_failed)?
            .render(context)
            .map_err(render_failed)
    }
}

#[derive(Serialize)]
struct SessionContext<'a> {
    drafts: &'a [super::DraftRow],
    error: Option<&'a str>,
    result: bool,
    prioritized: &'a [super::PrioritizedRow],
    invalid: &'a [super::InvalidRow],
}
