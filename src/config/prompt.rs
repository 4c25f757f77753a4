//! Canned response text for each message category.
//!
//! Templates are plain string constants. The only placeholder is `{language_line}` in
//! [`CODE_ANALYSIS`], filled by [`render_code_analysis`].

pub const CODE_ANALYSIS: &str = "📝 **Code Analysis (Rust Backend)**

{language_line}

**Analysis Results:**
• Syntax validation
• Performance review
• Security analysis
• Best practices check

**Recommendations:**
✓ Use type hints for better code clarity
✓ Add error handling for edge cases
✓ Implement unit tests
✓ Follow PEP 8 guidelines (Python)
";

pub const NO_LANGUAGE_DETECTED: &str = "**Language Detected:** none (no language detected)";

pub const MATH_SOLUTION: &str = "🔢 **Mathematical Solution**

I can help solve:
• Algebra problems
• Calculus derivatives and integrals
• Linear equations systems
• Statistics and probability
• Geometry problems

**Step-by-step approach:**
1. Identify the problem type
2. Apply relevant formulas
3. Show all working
4. Verify the solution
";

pub const DETAILED_ANSWER: &str = "❓ **Detailed Answer**

I can help you understand complex topics by:
• Breaking down concepts
• Providing examples
• Explaining step-by-step
• Offering resources

**Processing question...**
Please provide more details if you need:
• Technical explanation
• Practical examples
• External references
";

pub const GREETINGS: [&str; 4] = [
    "🤖 Hey there! I'm Chronex AI, powered by a Rust backend! How can I assist you today?",
    "Hello! Welcome to Chronex AI (Rust Edition). What would you like to explore?",
    "Greetings! Ready to solve problems? 💡",
    "Hi! I'm Chronex AI. Ask me anything! 🚀",
];

pub const GENERAL_RESPONSE: &str = "💬 **Response**

I'm Chronex AI with Rust backend capabilities:

🔧 **Technical Help:**
• Code analysis and review
• Algorithm optimization
• Debugging assistance

📊 **Data & Analysis:**
• Data processing
• Statistical analysis
• Visualization recommendations

What would you like to work on?
";

pub const PROCESSING_APOLOGY: &str = "⚠️ An error occurred while processing your message.";

pub fn render_code_analysis(detected_language: Option<&str>) -> String {
    let language_line = match detected_language {
        Some(language) => format!("**Language Detected:** {}", language),
        None => NO_LANGUAGE_DETECTED.to_string(),
    };
    CODE_ANALYSIS.replace("{language_line}", &language_line)
}
