use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Anything outside word characters, whitespace, and the punctuation set that
/// legitimately appears in prose. Everything else is an extraction artifact.
static ARTIFACTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[^\w\s.,!?;:\-()\[\]{}"'/@#$%&*+=<>~`]"#).unwrap());

static SPLIT_HYPHEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+)\s*-\s*(\w+)").unwrap());

static WORD_GAP: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w)\s+(\w)").unwrap());

static ELLIPSIS_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{3,}").unwrap());

static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").unwrap());

/// Clean up raw text extracted from a PDF.
///
/// Applies a fixed pipeline, in order: collapse whitespace runs to a single
/// space, strip non-prose artifact characters, close up hyphenated word pairs
/// split by justified line wrapping (`"co - operate"` → `"co-operate"`),
/// re-normalize spacing between word characters, cap period runs at `...`
/// and hyphen runs at `--`, then trim. Later steps assume earlier ones ran.
///
/// Total over all inputs: the empty string maps to the empty string. No
/// casing or Unicode normalization is performed, and `\w` is Unicode-aware,
/// so text in any script survives.
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let text = WHITESPACE_RUN.replace_all(raw, " ");
    let text = ARTIFACTS.replace_all(&text, "");
    let text = SPLIT_HYPHEN.replace_all(&text, "${1}-${2}");
    let text = WORD_GAP.replace_all(&text, "${1} ${2}");
    let text = ELLIPSIS_RUN.replace_all(&text, "...");
    let text = HYPHEN_RUN.replace_all(&text, "--");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t  "), "");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize("a   b\n\tc"), "a b c");
        assert_eq!(normalize("Hello   World"), "Hello World");
    }

    #[test]
    fn strips_artifact_characters() {
        assert_eq!(normalize("price: 5\u{20ac} or so"), "price: 5 or so");
        assert_eq!(normalize("bullet \u{2022} point"), "bullet point");
        // Allow-listed punctuation survives.
        assert_eq!(normalize("f(x) = [a] {b} <c> ~d"), "f(x) = [a] {b} <c> ~d");
    }

    #[test]
    fn rejoins_hyphen_split_words() {
        assert_eq!(normalize("co - operate"), "co-operate");
        assert_eq!(normalize("well-\nknown"), "well-known");
        assert_eq!(normalize("a - b and c - d"), "a-b and c-d");
    }

    #[test]
    fn collapses_period_runs_to_ellipsis() {
        assert_eq!(normalize("Wait...."), "Wait...");
        assert_eq!(normalize("Wait......"), "Wait...");
        assert_eq!(normalize("Wait..."), "Wait...");
        // Two periods are left alone.
        assert_eq!(normalize("Wait.."), "Wait..");
    }

    #[test]
    fn collapses_hyphen_runs_to_double_dash() {
        assert_eq!(normalize("a---b"), "a--b");
        assert_eq!(normalize("a-----b"), "a--b");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize("  padded  "), "padded");
    }

    #[test]
    fn preserves_non_latin_scripts() {
        assert_eq!(normalize("日本語  テキスト"), "日本語 テキスト");
        assert_eq!(normalize("Ελληνικά κείμενο"), "Ελληνικά κείμενο");
    }

    #[test]
    fn idempotent_on_typical_text() {
        let samples = [
            "A  line  with \n broken-\nup words and trailing dots.....",
            "Plain sentence, nothing to fix.",
            "hy - phen  and  a---dash",
            "  mixed \t whitespace \u{2022} artifacts  ",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }
}
