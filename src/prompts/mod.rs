//! Prompt composition for every operation.
//!
//! Each `compose_*` function picks the role instruction and content template
//! for one operation, fills the slots, and wraps the result with the
//! operation's output trailer. Composition is pure and fails with
//! [`PromptError`] before any network call is made.

mod library;
mod template;

use chrono::{DateTime, Utc};
use std::fmt;

pub use library::{execution_template, EXECUTION_TEMPLATES};
pub use template::{PromptError, PromptTemplate, PromptVars};

const REFACTOR_TRAILER: &str = "IMPORTANT: PROVIDE ONLY THE REFACTORED CODE. DO NOT EXPLAIN. DO NOT USE MARKDOWN CODE BLOCKS.\n\nREFACTORED CODE:";

const SIMULATION_TRAILER: &str = "IMPORTANT: \n\
1. PROVIDE ONLY THE TERMINAL OUTPUT (TEXT).\n\
2. DO NOT INCLUDE THE SOURCE CODE OR EXPLAIN.\n\
3. If the code requires user input and it is NOT provided or exhausted, return ONLY: value needed\n\n\
TERMINAL OUTPUT:";

/// Web asset kinds handled by the HTML/CSS/JS endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Html,
    Css,
    Js,
}

impl AssetKind {
    /// Parse the wire name (`html`, `css`, `js`).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "html" => Some(Self::Html),
            "css" => Some(Self::Css),
            "js" => Some(Self::Js),
            _ => None,
        }
    }

    /// Wire name, also used as the JSON key of refactor responses.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Css => "css",
            Self::Js => "js",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::Js => "JAVASCRIPT",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kinds of code assistance offered by `/ai-chat`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssistKind {
    #[default]
    Explain,
    Debug,
    Optimize,
    Docs,
    Complexity,
}

impl AssistKind {
    /// Parse a wire name, falling back to [`AssistKind::Explain`] for
    /// anything unrecognised.
    pub fn parse_or_default(value: Option<&str>) -> Self {
        match value {
            Some("debug") => Self::Debug,
            Some("optimize") => Self::Optimize,
            Some("docs") => Self::Docs,
            Some("complexity") => Self::Complexity,
            _ => Self::Explain,
        }
    }

    fn instruction(self) -> PromptTemplate {
        match self {
            Self::Explain => library::EXPLAIN_INSTRUCTION,
            Self::Debug => library::DEBUG_INSTRUCTION,
            Self::Optimize => library::OPTIMIZE_INSTRUCTION,
            Self::Docs => library::DOCS_INSTRUCTION,
            Self::Complexity => library::COMPLEXITY_INSTRUCTION,
        }
    }

    fn task_description(self) -> &'static str {
        match self {
            Self::Explain => "Explain how this code works.",
            Self::Debug => "Find bugs and suggest fixes for this code.",
            Self::Optimize => "Optimize this code for performance.",
            Self::Docs => "Generate comprehensive documentation for this code.",
            Self::Complexity => "Calculate time and space complexity.",
        }
    }
}

/// Human-readable UTC timestamp handed to the model as a recency hint,
/// e.g. `07:05:09 PM on October 17, 2026 UTC time zone`.
pub fn utc_time_reference(now: DateTime<Utc>) -> String {
    format!("{} UTC time zone", now.format("%I:%M:%S %p on %B %d, %Y"))
}

/// [`utc_time_reference`] for the current instant.
pub fn current_time_reference() -> String {
    utc_time_reference(Utc::now())
}

/// Prompt for `/generate_code`.
pub fn compose_code_generation(
    problem_description: &str,
    language: &str,
) -> Result<String, PromptError> {
    let vars = PromptVars::new()
        .with("language", language)
        .with("problem_description", problem_description);
    let instruction = library::GENERATE_INSTRUCTION.render(&vars)?;
    let content = library::GENERATE_CODE.render(&vars)?;
    Ok(format!(
        "{instruction}\n\nTASK: Generate the following code.\n{content}\n\nRAW CODE ONLY:"
    ))
}

/// Prompt for `/get-output`.
///
/// `template` comes from [`execution_template`]. Empty `user_input` counts as
/// no input.
pub fn compose_output_simulation(
    template: &PromptTemplate,
    language: &str,
    code: &str,
    user_input: Option<&str>,
    time: &str,
) -> Result<String, PromptError> {
    let vars = PromptVars::new()
        .with("language", language)
        .with("code", code)
        .with("time", time);
    let instruction = library::COMPILER_INSTRUCTION.render(&vars)?;
    let content = template.render(&vars)?;
    let input_block = match user_input.filter(|input| !input.is_empty()) {
        Some(input) => format!(
            "\n\nPROVIDED USER INPUTS (to be used when the code requests input):\n{input}\n"
        ),
        None => "\n\nNO USER INPUTS PROVIDED.".to_string(),
    };
    Ok(format!(
        "{instruction}\n\n{content}{input_block}\n\n{SIMULATION_TRAILER}"
    ))
}

/// Prompt for `/refactor_code`.
pub fn compose_code_refactor(
    code: &str,
    language: &str,
    output: &str,
    problem_description: Option<&str>,
) -> Result<String, PromptError> {
    let mut vars = PromptVars::new()
        .with("code", code)
        .with("language", language)
        .with("output", output);
    let content = match problem_description {
        Some(description) => {
            vars = vars.with("problem_description", description);
            library::REFACTOR_CODE_WITH_DESCRIPTION.render(&vars)?
        },
        None => library::REFACTOR_CODE.render(&vars)?,
    };
    let instruction = library::REFACTOR_INSTRUCTION.render(&vars)?;
    Ok(format!("{instruction}\n\n{content}\n\n{REFACTOR_TRAILER}"))
}

/// Prompt for `/htmlcssjsgenerate-code`.
pub fn compose_asset_generation(
    kind: AssetKind,
    project_description: &str,
    html_content: &str,
    css_content: &str,
    time: &str,
) -> Result<String, PromptError> {
    let vars = PromptVars::new()
        .with("prompt", project_description)
        .with("project_description", project_description)
        .with("html_content", html_content)
        .with("css_content", css_content)
        .with("time", time);
    let (instruction, template, task) = match kind {
        AssetKind::Html => (
            library::HTML_GENERATE_INSTRUCTION,
            library::HTML_GENERATE,
            "TASK: Generate the following HTML code.",
        ),
        AssetKind::Css => (
            library::CSS_GENERATE_INSTRUCTION,
            library::CSS_GENERATE,
            "TASK: Generate the following CSS code for the provided HTML.",
        ),
        AssetKind::Js => (
            library::JS_GENERATE_INSTRUCTION,
            library::JS_GENERATE,
            "TASK: Generate the following JavaScript code for the provided HTML and CSS.",
        ),
    };
    let instruction = instruction.render(&vars)?;
    let content = template.render(&vars)?;
    let label = kind.label();
    Ok(format!(
        "{instruction}\n\n{task}\n{content}\n\nIMPORTANT: PROVIDE ONLY THE {label} CODE. DO NOT EXPLAIN. DO NOT USE MARKDOWN CODE BLOCKS.\n\n{label} CODE:"
    ))
}

/// Prompt for `/htmlcssjsrefactor-code`.
///
/// Which contents are required for which kind is decided by the handler;
/// this only selects the template variant.
pub fn compose_asset_refactor(
    kind: AssetKind,
    html_content: &str,
    css_content: &str,
    js_content: &str,
    problem_description: Option<&str>,
) -> Result<String, PromptError> {
    let mut vars = PromptVars::new()
        .with("language", kind.as_str())
        .with("html_content", html_content)
        .with("css_content", css_content)
        .with("js_content", js_content);
    let template = match (kind, problem_description) {
        (AssetKind::Html, Some(_)) => library::REFACTOR_HTML_WITH_DESCRIPTION,
        (AssetKind::Css, Some(_)) => library::REFACTOR_CSS_WITH_DESCRIPTION,
        (AssetKind::Js, Some(_)) => library::REFACTOR_JS_WITH_DESCRIPTION,
        (AssetKind::Html, None) => library::REFACTOR_HTML,
        (AssetKind::Css, None) => library::REFACTOR_CSS,
        (AssetKind::Js, None) => library::REFACTOR_JS,
    };
    if let Some(description) = problem_description {
        vars = vars.with("problem_description", description);
    }
    let instruction = library::REFACTOR_INSTRUCTION.render(&vars)?;
    let content = template.render(&vars)?;
    Ok(format!("{instruction}\n\n{content}\n\n{REFACTOR_TRAILER}"))
}

/// Prompt for `/ai-chat`.
pub fn compose_assist(
    kind: AssistKind,
    code: &str,
    language: &str,
    output: &str,
) -> Result<String, PromptError> {
    let vars = PromptVars::new()
        .with("code", code)
        .with("language", language)
        .with("output", output)
        .with("task_description", kind.task_description());
    let instruction = kind.instruction().render(&vars)?;
    let content = library::CHAT.render(&vars)?;
    Ok(format!("{instruction}\n\n{content}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_utc_time_reference_format() {
        let at = Utc.with_ymd_and_hms(2026, 10, 17, 19, 5, 9).unwrap();
        assert_eq!(
            utc_time_reference(at),
            "07:05:09 PM on October 17, 2026 UTC time zone"
        );
    }

    #[test]
    fn test_morning_time_uses_am() {
        let at = Utc.with_ymd_and_hms(2024, 2, 3, 0, 30, 0).unwrap();
        assert_eq!(
            utc_time_reference(at),
            "12:30:00 AM on February 03, 2024 UTC time zone"
        );
    }

    #[test]
    fn test_code_generation_prompt() {
        let prompt = compose_code_generation("reverse a string", "rust").unwrap();
        assert_eq!(
            prompt,
            "ACT AS A SENIOR SOFTWARE ENGINEER. GENERATE PRODUCTION-READY rust CODE FOR THE GIVEN PROBLEM. OUTPUT ONLY CODE.\n\n\
TASK: Generate the following code.\n\
TASK: Solve in rust: reverse a string. Output ONLY code. No markdown.\n\n\
RAW CODE ONLY:"
        );
    }

    #[test]
    fn test_simulation_prompt_with_and_without_input() {
        let template = execution_template("python").unwrap();
        let with_input = compose_output_simulation(
            template,
            "python",
            "print(input())",
            Some("42"),
            "01:00:00 PM on January 01, 2026 UTC time zone",
        )
        .unwrap();
        assert!(with_input.contains(
            "PROVIDED USER INPUTS (to be used when the code requests input):\n42\n"
        ));
        assert!(with_input.contains("PROGRAM:\nprint(input())"));
        assert!(with_input.contains("01:00:00 PM on January 01, 2026 UTC time zone"));
        assert!(with_input.ends_with("TERMINAL OUTPUT:"));

        let without_input =
            compose_output_simulation(template, "python", "print('hi')", Some(""), "now").unwrap();
        assert!(without_input.contains("\n\nNO USER INPUTS PROVIDED.\n\n"));
    }

    #[test]
    fn test_code_refactor_picks_variant_by_description() {
        let plain = compose_code_refactor("x=1", "python", "", None).unwrap();
        assert!(plain.contains("TASK: Optimize python code: x=1. Previous Output: ."));

        let described = compose_code_refactor("x=1", "python", "1", Some("use a constant")).unwrap();
        assert!(described.contains("TASK: Refactor python code for: use a constant. Code: x=1."));
        assert!(described.ends_with("REFACTORED CODE:"));
    }

    #[test]
    fn test_asset_generation_prompt_for_css() {
        let prompt =
            compose_asset_generation(AssetKind::Css, "a landing page", "<main></main>", "", "t")
                .unwrap();
        assert!(prompt.starts_with("ACT AS A SENIOR CSS ARCHITECT."));
        assert!(prompt.contains("TASK: Generate CSS for: a landing page. HTML Context: <main></main>."));
        assert!(prompt.ends_with("CSS CODE:"));
    }

    #[test]
    fn test_asset_generation_js_label() {
        let prompt = compose_asset_generation(AssetKind::Js, "tabs", "<div>", "div{}", "t").unwrap();
        assert!(prompt.contains("PROVIDE ONLY THE JAVASCRIPT CODE."));
        assert!(prompt.contains("HTML/CSS Context: <div> / div{}."));
    }

    #[test]
    fn test_asset_refactor_variants() {
        let plain = compose_asset_refactor(AssetKind::Css, "<p>", "p{}", "", None).unwrap();
        assert!(plain.contains("TASK: Refactor this CSS (Context HTML): <p> / CSS: p{}"));
        assert!(plain.starts_with("ACT AS A SENIOR css CODE ARCHITECT."));

        let described =
            compose_asset_refactor(AssetKind::Js, "<p>", "p{}", "go()", Some("fix the click"))
                .unwrap();
        assert!(described.contains(
            "TASK: Refactor this JS to fix: fix the click. HTML: <p> CSS: p{} JS: go()"
        ));
    }

    #[test]
    fn test_assist_prompt() {
        let prompt = compose_assist(AssistKind::Debug, "1/0", "python", "ZeroDivisionError").unwrap();
        assert!(prompt.starts_with("ACT AS A SENIOR DEBUGGER."));
        assert!(prompt.contains("```python\n1/0\n```"));
        assert!(prompt.contains("TASK: Find bugs and suggest fixes for this code."));
    }

    #[test]
    fn test_assist_kind_parsing() {
        assert_eq!(AssistKind::parse_or_default(Some("docs")), AssistKind::Docs);
        assert_eq!(AssistKind::parse_or_default(Some("poetry")), AssistKind::Explain);
        assert_eq!(AssistKind::parse_or_default(None), AssistKind::Explain);
    }

    #[test]
    fn test_asset_kind_round_trip_names() {
        for kind in [AssetKind::Html, AssetKind::Css, AssetKind::Js] {
            assert_eq!(AssetKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(AssetKind::parse("HTML"), None);
    }
}
