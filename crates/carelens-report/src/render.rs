use tera::{Context, Tera};

use carelens_core::models::report::ScreeningReport;

use crate::error::ReportError;

/// Render a Tera template with a ScreeningReport.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// The report's fields become the template context variables.
pub fn render_report(
    template_name: &str,
    template_content: &str,
    report: &ScreeningReport,
) -> Result<String, ReportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ReportError::TemplateParse(e.to_string()))?;

    // Convert the report to a Tera context via serde_json
    let value = serde_json::to_value(report)?;
    let context = Context::from_value(value)
        .map_err(|e| ReportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// The default plain-text report template shipped with the app.
pub const DEFAULT_TEMPLATE: &str = "\
Cognitive Screening Report ({{ token }})

Score: {{ result.total }} of {{ result.max_possible }}
Level of concern: {{ guidance.severity }} ({{ guidance.urgency }})

{{ guidance.message }}

Recommendation: {{ guidance.recommendation }}

Next steps:
{% for step in guidance.next_steps %}- {{ step }}
{% endfor %}
{%- if narrative %}
{{ narrative }}
{% endif %}";
