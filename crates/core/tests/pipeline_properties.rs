//! Property tests for slide counting, ordering, and determinism.

use impress_core::{Assets, MarkdownRenderer, Pipeline};
use proptest::prelude::*;

/// Echoes the slide text so each container can be matched to its source.
struct Echo;

impl MarkdownRenderer for Echo {
    fn render(&self, markdown: &str) -> String {
        markdown.trim_end().to_string()
    }
}

fn slide_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,8}( [a-z]{1,8}){0,3}", 1..4)
}

fn deck_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(slide_strategy(), 0..8)
}

fn container_offsets(html: &str) -> Vec<usize> {
    html.match_indices("<div class=\"slide step\" data-x=\"")
        .map(|(pos, marker)| {
            let rest = &html[pos + marker.len()..];
            let end = rest.find('"').unwrap();
            rest[..end].parse().unwrap()
        })
        .collect()
}

fn join_slides(slides: &[Vec<String>], separator: &str) -> String {
    slides
        .iter()
        .map(|lines| lines.join("\n"))
        .collect::<Vec<_>>()
        .join(separator)
}

proptest! {
    #[test]
    fn no_separator_yields_one_slide(lines in slide_strategy()) {
        let html = Pipeline::default().render_to_string(&lines.join("\n")).unwrap();
        prop_assert_eq!(container_offsets(&html), vec![0]);
    }

    #[test]
    fn separators_yield_one_container_per_slide(slides in deck_strategy(), trailing in any::<bool>()) {
        let mut input = join_slides(&slides, "\n---\n");
        if trailing && !slides.is_empty() {
            input.push_str("\n---\n");
        }

        let html = Pipeline::default().render_to_string(&input).unwrap();
        let expected: Vec<usize> = (0..slides.len()).map(|i| i * 1000).collect();
        prop_assert_eq!(container_offsets(&html), expected);
    }

    #[test]
    fn blank_runs_between_separators_are_skipped(
        slides in deck_strategy(),
        blanks in prop::collection::vec("[ \t]{0,3}", 0..3),
    ) {
        let filler = blanks
            .iter()
            .map(|b| format!("---\n{}\n", b))
            .collect::<String>();
        let separator = format!("\n---\n{}", filler);
        let input = join_slides(&slides, &separator);

        let html = Pipeline::default().render_to_string(&input).unwrap();
        prop_assert_eq!(container_offsets(&html).len(), slides.len());
    }

    #[test]
    fn containers_follow_input_order(slides in deck_strategy()) {
        let input = join_slides(&slides, "\n---\n");
        let html = Pipeline::default().with_renderer(Echo).render_to_string(&input).unwrap();

        let mut last = 0;
        for (i, lines) in slides.iter().enumerate() {
            let container = format!(
                "<div class=\"slide step\" data-x=\"{}\">\n{}\n</div>",
                i * 1000,
                lines.join("\n")
            );
            let pos = html[last..].find(&container);
            prop_assert!(pos.is_some(), "slide {} missing or out of order", i);
            last += pos.unwrap() + container.len();
        }
    }

    #[test]
    fn output_is_deterministic(slides in deck_strategy()) {
        let input = join_slides(&slides, "\n---\n");
        let pipeline = Pipeline::new(Assets::new().with_script("js/impress.js"));

        let first = pipeline.render_to_string(&input).unwrap();
        let second = pipeline.render_to_string(&input).unwrap();
        prop_assert_eq!(&first, &second);

        let mut sequential = Vec::new();
        pipeline.run_sequential(input.as_bytes(), &mut sequential).unwrap();
        prop_assert_eq!(first.into_bytes(), sequential);
    }
}

#[test]
fn example_deck() {
    let html = Pipeline::default().render_to_string("# A\n---\n# B\n").unwrap();
    assert_eq!(container_offsets(&html), vec![0, 1000]);
    assert!(html.contains("data-x=\"0\">\n<h1>A</h1>\n\n</div>"));
    assert!(html.contains("data-x=\"1000\">\n<h1>B</h1>\n\n</div>"));
}

#[test]
fn asset_defaults_and_overrides() {
    let html = Pipeline::default().render_to_string("x\n").unwrap();
    assert!(html.contains("href=\"impress.css\""));
    assert!(html.contains("src=\"impress.js\""));

    let assets = Assets::new()
        .with_stylesheet("styles/talk.css")
        .with_script("lib/impress-1.1.js");
    let html = Pipeline::new(assets).render_to_string("x\n").unwrap();
    assert!(html.contains("href=\"styles/talk.css\""));
    assert!(html.contains("src=\"lib/impress-1.1.js\""));
}
