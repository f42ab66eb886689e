/// Request for one entry, laid out so [`crate::parse_response`] can read the
/// answer back.
pub fn entry_prompt(word: &str) -> String {
    format!(
        r#"Please provide information for the French word or expression "{word}" in the following format. If the input is an English word or expression, translate it into French first and describe the French result. If it is a conjugated verb, describe its infinitive.
Correctly Spelt Word: WORD
Word Type: [noun, verb, adjective, expression, adverb, pronominal verb, or another plain word type]
Definitions:
a. [First English definition]
b. [Second English definition]
c. [Third English definition (if applicable)]
Examples:
1. [French example 1]
[English translation 1]
2. [French example 2]
[English translation 2]
3. [French example 3 (if applicable)]
[English translation 3 (if applicable)]
Apply the following criteria:
1. Always give French verbs in their infinitive form.
2. Write the word type in plain words, without symbols or marks.
3. Give detailed and nuanced English definitions that cover the different senses of the word.
4. Give context-rich examples, each on one line, followed by an English translation on the next line that keeps the meaning and tone of the French."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_the_word_and_sections() {
        let prompt = entry_prompt("agaçant");
        assert!(prompt.contains("\"agaçant\""));
        for section in ["Correctly Spelt Word:", "Word Type:", "Definitions:", "Examples:"] {
            assert!(prompt.contains(section), "missing {section}");
        }
    }
}
