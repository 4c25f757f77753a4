use serde::{ Deserialize, Serialize };
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Code,
    Math,
    Question,
    Greeting,
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Code => "code",
            Category::Math => "math",
            Category::Question => "question",
            Category::Greeting => "greeting",
            Category::General => "general",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Category::Code => 0,
            Category::Math => 1,
            Category::Question => 2,
            Category::Greeting => 3,
            Category::General => 4,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category and the substrings that select it.
#[derive(Debug)]
pub struct KeywordRule {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

impl KeywordRule {
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Rules in priority order. The first rule with any keyword contained in the
/// lower-cased text decides the category; anything else is `General`.
pub const RULES: [KeywordRule; 4] = [
    KeywordRule {
        category: Category::Code,
        keywords: &["code", "function", "javascript", "python", "algorithm"],
    },
    KeywordRule {
        category: Category::Math,
        keywords: &["solve", "calculate", "=", "math", "equation", "equals", "answer"],
    },
    KeywordRule {
        category: Category::Question,
        keywords: &["?", "what", "how", "why", "explain"],
    },
    KeywordRule {
        category: Category::Greeting,
        keywords: &["hello", "hi", "hey", "greetings", "whats up", "xup"],
    },
];

pub fn classify(text: &str) -> Category {
    let lowered = text.to_lowercase();
    RULES.iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.category)
        .unwrap_or(Category::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_names_classify_as_code() {
        assert_eq!(classify("I love JavaScript"), Category::Code);
        assert_eq!(classify("PYTHON question?"), Category::Code);
        assert_eq!(classify("sort algorithm please"), Category::Code);
    }

    #[test]
    fn equals_sign_classifies_as_math() {
        assert_eq!(classify("x = 4"), Category::Math);
        assert_eq!(classify("2+2=?"), Category::Math);
    }

    #[test]
    fn code_outranks_greeting() {
        assert_eq!(classify("hi, can you write a function"), Category::Code);
    }

    #[test]
    fn math_outranks_question() {
        assert_eq!(classify("Can you solve 2x + 3 = 7?"), Category::Math);
    }

    #[test]
    fn question_markers() {
        assert_eq!(classify("Why is the sky blue"), Category::Question);
        assert_eq!(classify("really?"), Category::Question);
        assert_eq!(classify("Explain lifetimes"), Category::Question);
    }

    #[test]
    fn greetings() {
        assert_eq!(classify("hello there"), Category::Greeting);
        assert_eq!(classify("Hey"), Category::Greeting);
        assert_eq!(classify("xup"), Category::Greeting);
    }

    #[test]
    fn falls_through_to_general() {
        assert_eq!(classify(""), Category::General);
        assert_eq!(classify("tell me a story"), Category::General);
        assert_eq!(classify("日本語のテキスト"), Category::General);
        assert_eq!(classify("Ünïcödé ßtring"), Category::General);
    }

    #[test]
    fn greeting_keywords_match_inside_words() {
        // "this" contains "hi"; substring matching is intentional.
        assert_eq!(classify("this one"), Category::Greeting);
    }

    #[test]
    fn rule_table_is_in_priority_order() {
        let order: Vec<Category> = RULES.iter().map(|rule| rule.category).collect();
        assert_eq!(
            order,
            vec![Category::Code, Category::Math, Category::Question, Category::Greeting]
        );
    }

    #[test]
    fn displays_lowercase_names() {
        assert_eq!(Category::Code.to_string(), "code");
        assert_eq!(Category::General.to_string(), "general");
        assert_eq!(serde_json::to_value(Category::Question).unwrap(), "question");
    }
}
