use crate::core::traits::PromptTransformer;
use crate::utils::format::{heavy_rule, light_rule};

/// Requests walked by the demonstration harness, in order
pub const DEMO_REQUESTS: [&str; 7] = [
    "Make the inspector panel draggable",
    "Add authentication to my app",
    "Create a new modal component",
    "Build an API endpoint for user data",
    "Add a database table for orders",
    "I want a simple way to upload files",
    "Need to position the tooltip correctly",
];

pub fn handle_demo_command(transformer: &impl PromptTransformer) {
    print!("{}", render_demo(transformer));
}

/// Full demo transcript, ending with a newline
pub fn render_demo(transformer: &impl PromptTransformer) -> String {
    let mut out = String::new();
    out.push_str("🧪 CONTEXT ENGINEERING TRANSFORMER TESTS\n\n");
    out.push_str(&heavy_rule());
    out.push('\n');

    for (i, request) in DEMO_REQUESTS.iter().enumerate() {
        out.push_str(&format!("\n🔍 TEST {}: {}\n", i + 1, request));
        out.push_str(&light_rule());
        out.push('\n');
        out.push_str(&transformer.transform(request));
        out.push_str("\n\n");
        out.push_str(&heavy_rule());
        out.push('\n');
    }

    out
}
