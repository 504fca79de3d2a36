//! Cover letter markup.

use askama::Template;

#[derive(Template)]
#[template(path = "cover_letter.html")]
struct CoverLetterPage<'a> {
    paragraphs: Vec<Vec<&'a str>>,
}

/// Splits a letter into paragraphs on blank or whitespace-only lines. Line
/// endings may be `\n` or `\r\n`; single line breaks inside a paragraph are kept.
pub fn paragraphs(letter: &str) -> Vec<Vec<&str>> {
    let mut paragraphs = Vec::new();
    let mut current = Vec::new();
    for line in letter.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line.trim_end());
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }
    paragraphs
}

/// One `<p>` per paragraph, `<br>` between its lines.
pub fn render_cover_letter(letter: &str) -> Result<String, askama::Error> {
    CoverLetterPage {
        paragraphs: paragraphs(letter),
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_letter_paragraphs() {
        let html = render_cover_letter("Dear team,\n\nI build\nthings.\n\n\n\nRegards,\nJane").unwrap();
        assert_eq!(html.matches("<p ").count(), 3);
        assert!(html.contains("I build<br>things."));
        assert!(html.contains("Regards,<br>Jane"));
    }

    #[test]
    fn test_crlf_and_whitespace_only_lines_separate_paragraphs() {
        assert_eq!(
            paragraphs("Dear team,\r\n\r\nI build\r\nthings.\n   \t\nRegards"),
            vec![vec!["Dear team,"], vec!["I build", "things."], vec!["Regards"]]
        );
        let html = render_cover_letter("One\r\n \r\nTwo").unwrap();
        assert_eq!(html.matches("<p ").count(), 2);
        assert!(!html.contains('\r'));
    }

    #[test]
    fn test_cover_letter_is_escaped() {
        let html = render_cover_letter("Work at <Acme> & co").unwrap();
        assert!(html.contains("Work at &lt;Acme&gt; &amp; co"));
    }

    #[test]
    fn test_blank_letter_has_no_paragraphs() {
        assert!(paragraphs(" \n\r\n\t").is_empty());
    }
}
