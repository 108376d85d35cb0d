// src/prompt.rs

/// Builds the Socratic tutor persona prompt for one question.
///
/// The instructions forbid giving the answer outright and pitch the guidance
/// at the student's grade level. Only `language == "en"` switches the reply
/// language to English; anything else keeps Chinese.
pub fn socratic_prompt(grade: &str, subject: &str, question: &str, language: &str) -> String {
    let language_directive = if language == "en" { "英文" } else { "中文" };
    format!(
        "你是一位苏格拉底式导师。学生等级: {}, 科目: {}。\n任务: 引导学生思考问题 \"{}\"。\n规则: 1. 绝对严禁直接给出答案。 2. 使用{}。\n3. 针对{}学生的认知水平进行逻辑拆解。",
        grade, subject, question, language_directive, grade
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_student_context() {
        let prompt = socratic_prompt("五年级", "数学", "为什么负负得正", "zh");

        assert!(prompt.contains("学生等级: 五年级, 科目: 数学"));
        assert!(prompt.contains("引导学生思考问题 \"为什么负负得正\""));
        // The grade is repeated in the cognitive-level rule.
        assert!(prompt.contains("针对五年级学生的认知水平"));
    }

    #[test]
    fn test_prompt_defaults_to_chinese() {
        let prompt = socratic_prompt("初二", "物理", "光为什么会折射", "zh");
        assert!(prompt.contains("使用中文"));
        assert!(!prompt.contains("使用英文"));
    }

    #[test]
    fn test_prompt_switches_to_english_only_for_en() {
        let en = socratic_prompt("Grade 5", "math", "Why is the sky blue?", "en");
        assert!(en.contains("使用英文"));

        // Anything that is not exactly "en" keeps Chinese.
        let upper = socratic_prompt("Grade 5", "math", "Why is the sky blue?", "EN");
        assert!(upper.contains("使用中文"));

        let empty = socratic_prompt("Grade 5", "math", "Why is the sky blue?", "");
        assert!(empty.contains("使用中文"));
    }

    #[test]
    fn test_prompt_keeps_rule_numbering() {
        let prompt = socratic_prompt("五年级", "科学", "天空为什么是蓝色的", "zh");
        assert!(prompt.contains("规则: 1. 绝对严禁直接给出答案。 2. "));
        assert!(prompt.contains("\n3. "));
    }
}
