//! Instruction preambles and content templates.

use super::template::PromptTemplate;

// ─── Role instructions ──────────────────────────────────────────────────────

pub const GENERATE_INSTRUCTION: PromptTemplate = PromptTemplate::new(
    "generate_instruction",
    "ACT AS A SENIOR SOFTWARE ENGINEER. GENERATE PRODUCTION-READY {language} CODE FOR THE GIVEN PROBLEM. OUTPUT ONLY CODE.",
);

pub const COMPILER_INSTRUCTION: PromptTemplate = PromptTemplate::new(
    "compiler_instruction",
    "ZERO_TOLERANCE_MODE: ACT AS A {language} COMPILER AND RUNTIME. OUTPUT ONLY THE RAW TERMINAL TEXT. NO MARKDOWN. NO EXPLANATIONS. NO CODE RE-STATEMENT.",
);

pub const REFACTOR_INSTRUCTION: PromptTemplate = PromptTemplate::new(
    "refactor_instruction",
    "ACT AS A SENIOR {language} CODE ARCHITECT. REFACTOR THE PROVIDED CODE TO BE MORE ROBUST AND PERFORMANT. OUTPUT ONLY CODE.",
);

pub const HTML_GENERATE_INSTRUCTION: PromptTemplate = PromptTemplate::new(
    "html_generate_instruction",
    "ACT AS A SENIOR FRONTEND DEVELOPER. GENERATE SEMANTIC HTML5. OUTPUT ONLY CODE.",
);

pub const CSS_GENERATE_INSTRUCTION: PromptTemplate = PromptTemplate::new(
    "css_generate_instruction",
    "ACT AS A SENIOR CSS ARCHITECT. GENERATE RESPONSIVE MODERN CSS. OUTPUT ONLY CODE.",
);

pub const JS_GENERATE_INSTRUCTION: PromptTemplate = PromptTemplate::new(
    "js_generate_instruction",
    "ACT AS A SENIOR JAVASCRIPT DEVELOPER. GENERATE EFFICIENT JS. OUTPUT ONLY CODE.",
);

pub const EXPLAIN_INSTRUCTION: PromptTemplate = PromptTemplate::new(
    "explain_instruction",
    "ACT AS A SENIOR CODE ARCHITECT AND TECHNICAL WRITER. PROVIDE A CLEAR, STEP-BY-STEP EXPLANATION OF THE PROVIDED CODE LOGIC. USE MARKDOWN. BE PRECISE.",
);

pub const DEBUG_INSTRUCTION: PromptTemplate = PromptTemplate::new(
    "debug_instruction",
    "ACT AS A SENIOR DEBUGGER. IDENTIFY LOGICAL ERRORS, POTENTIAL BUGS, AND EDGE CASES IN THE PROVIDED CODE. PROVIDE FIXES.",
);

pub const OPTIMIZE_INSTRUCTION: PromptTemplate = PromptTemplate::new(
    "optimize_instruction",
    "ACT AS A PERFORMANCE ENGINEER. ANALYZE TIME AND SPACE COMPLEXITY AND PROVIDE AN OPTIMIZED VERSION OF THE CODE.",
);

pub const DOCS_INSTRUCTION: PromptTemplate = PromptTemplate::new(
    "docs_instruction",
    "ACT AS A DOCUMENTATION SPECIALIST. GENERATE PROFESSIONAL DOCSTRINGS, COMMENTS, AND README SNIPPETS FOR THE CODE.",
);

pub const COMPLEXITY_INSTRUCTION: PromptTemplate = PromptTemplate::new(
    "complexity_instruction",
    "ACT AS A COMPUTER SCIENCE PROFESSOR. ANALYZE THE CODE AND PROVIDE A DETAILED BIG-O COMPLEXITY REPORT (TIME & SPACE).",
);

// ─── Code tasks ─────────────────────────────────────────────────────────────

pub const GENERATE_CODE: PromptTemplate = PromptTemplate::new(
    "generate_code",
    "TASK: Solve in {language}: {problem_description}. Output ONLY code. No markdown.",
);

pub const REFACTOR_CODE: PromptTemplate = PromptTemplate::new(
    "refactor_code",
    "TASK: Optimize {language} code: {code}. Previous Output: {output}. Output ONLY code.",
);

pub const REFACTOR_CODE_WITH_DESCRIPTION: PromptTemplate = PromptTemplate::new(
    "refactor_code_with_description",
    "TASK: Refactor {language} code for: {problem_description}. Code: {code}. Previous Output: {output}. Output ONLY code.",
);

pub const CHAT: PromptTemplate = PromptTemplate::new(
    "chat",
    "CODE CONTEXT:\n```{language}\n{code}\n```\n\nPREVIOUS OUTPUT:\n{output}\n\nTASK: {task_description}\n\nINSTRUCTION: Provide a comprehensive and professional response.",
);

// ─── Web assets ─────────────────────────────────────────────────────────────

pub const HTML_GENERATE: PromptTemplate = PromptTemplate::new(
    "html_generate",
    "TASK: Generate specific HTML for: {prompt}. Current time: {time}. Rules: No head/body, no inline scripts/styles. Output ONLY code.",
);

pub const CSS_GENERATE: PromptTemplate = PromptTemplate::new(
    "css_generate",
    "TASK: Generate CSS for: {project_description}. HTML Context: {html_content}. Current time: {time}. Rules: Responsive only. Output ONLY code.",
);

pub const JS_GENERATE: PromptTemplate = PromptTemplate::new(
    "js_generate",
    "TASK: Generate JS for: {project_description}. HTML/CSS Context: {html_content} / {css_content}. Current time: {time}. Rules: ES6+. Output ONLY code.",
);

pub const REFACTOR_HTML: PromptTemplate = PromptTemplate::new(
    "refactor_html",
    "TASK: Refactor this HTML: {html_content}",
);

pub const REFACTOR_CSS: PromptTemplate = PromptTemplate::new(
    "refactor_css",
    "TASK: Refactor this CSS (Context HTML): {html_content} / CSS: {css_content}",
);

pub const REFACTOR_JS: PromptTemplate = PromptTemplate::new(
    "refactor_js",
    "TASK: Refactor this JS (Context HTML/CSS): {html_content} / {css_content} / JS: {js_content}",
);

pub const REFACTOR_HTML_WITH_DESCRIPTION: PromptTemplate = PromptTemplate::new(
    "refactor_html_with_description",
    "TASK: Refactor this HTML to fix: {problem_description}. HTML: {html_content}",
);

pub const REFACTOR_CSS_WITH_DESCRIPTION: PromptTemplate = PromptTemplate::new(
    "refactor_css_with_description",
    "TASK: Refactor this CSS to fix: {problem_description}. HTML: {html_content} CSS: {css_content}",
);

pub const REFACTOR_JS_WITH_DESCRIPTION: PromptTemplate = PromptTemplate::new(
    "refactor_js_with_description",
    "TASK: Refactor this JS to fix: {problem_description}. HTML: {html_content} CSS: {css_content} JS: {js_content}",
);

// ─── Output simulation ──────────────────────────────────────────────────────

macro_rules! execution_prompt {
    ($name:literal, $runtime:literal) => {
        PromptTemplate::new(
            concat!("execute_", $name),
            concat!(
                "You are executing the following program with ",
                $runtime,
                ". The current date and time is {time}; use it for any clock or date calls.\n",
                "Reproduce exactly what the process writes to stdout and stderr, including compiler ",
                "diagnostics and runtime errors, in the order they would appear.\n\n",
                "PROGRAM:\n{code}"
            ),
        )
    };
}

/// Per-language output-simulation templates. Languages missing here are
/// rejected by `/get-output` before any model call.
pub const EXECUTION_TEMPLATES: &[(&str, PromptTemplate)] = &[
    ("python", execution_prompt!("python", "CPython 3.12")),
    ("javascript", execution_prompt!("javascript", "Node.js 20")),
    ("typescript", execution_prompt!("typescript", "tsc 5 followed by Node.js 20")),
    ("java", execution_prompt!("java", "OpenJDK 21 (javac then java Main)")),
    ("c", execution_prompt!("c", "GCC 13 (-std=c17) and the resulting binary")),
    ("cpp", execution_prompt!("cpp", "G++ 13 (-std=c++20) and the resulting binary")),
    ("csharp", execution_prompt!("csharp", ".NET 8 (dotnet run)")),
    ("go", execution_prompt!("go", "Go 1.22 (go run)")),
    ("rust", execution_prompt!("rust", "rustc 1.80 (stable) and the resulting binary")),
    ("ruby", execution_prompt!("ruby", "Ruby 3.3")),
    ("swift", execution_prompt!("swift", "Swift 5.10")),
    ("kotlin", execution_prompt!("kotlin", "Kotlin 1.9 on the JVM")),
    ("dart", execution_prompt!("dart", "Dart 3 (dart run)")),
    ("php", execution_prompt!("php", "PHP 8.3 CLI")),
    ("scala", execution_prompt!("scala", "Scala 3")),
    ("perl", execution_prompt!("perl", "Perl 5.38")),
    ("julia", execution_prompt!("julia", "Julia 1.10")),
    ("r", execution_prompt!("r", "R 4.4 (Rscript)")),
    ("bash", execution_prompt!("bash", "GNU Bash 5")),
    ("sql", execution_prompt!("sql", "SQLite 3 (print result sets as plain text tables)")),
    ("mongodb", execution_prompt!("mongodb", "mongosh against an empty test database")),
    ("verilog", execution_prompt!("verilog", "Icarus Verilog (iverilog then vvp)")),
];

/// Look up the output-simulation template for `language`.
pub fn execution_template(language: &str) -> Option<&'static PromptTemplate> {
    EXECUTION_TEMPLATES
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, template)| template)
}
