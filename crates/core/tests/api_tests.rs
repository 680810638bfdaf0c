//! Library API integration tests
use notesync_core::*;
use scraper::{Html, Selector};

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn texts(html: &str, selector: &str) -> Vec<String> {
    let fragment = Html::parse_fragment(html);
    let selector = Selector::parse(selector).unwrap();
    fragment.select(&selector).map(|el| el.text().collect::<String>()).collect()
}

fn max_list_depth(html: &str) -> usize {
    let mut depth = 0usize;
    let mut max = 0;
    for line in html.lines() {
        match line {
            "<ul>" => {
                depth += 1;
                max = max.max(depth);
            }
            "</ul>" => depth -= 1,
            _ => {}
        }
    }
    max
}

#[test]
fn test_convert_notes_fixture() {
    let html = convert_file(get_fixture_path("weekly.notes"), &ConvertOptions::default()).expect("should convert");

    assert!(html.starts_with("<html xmlns=\"http://www.w3.org/1999/xhtml\" xml:lang=\"en\">"));
    assert!(html.ends_with("</html>\n"));
    assert_eq!(texts(&html, "h3"), vec!["Weekly Sync"]);
    assert_eq!(texts(&html, "ul ul ul li"), vec!["mobile"]);
    assert_eq!(
        texts(&html, "p"),
        vec!["Action items are tracked in the shared sheet and reviewed on Monday."]
    );
}

#[test]
fn test_notes_fixture_fragment() {
    let text = fetch_file(get_fixture_path("weekly.notes")).unwrap();
    let fragment = notes_to_fragment(&text);

    assert_eq!(
        fragment,
        concat!(
            "<h3>Weekly Sync</h3>\n",
            "<br/>\n",
            "<ul>\n",
            "<li>release planning</li>\n",
            "<ul>\n",
            "<li>freeze on Thursday</li>\n",
            "<li>QA sign-off needed from both teams</li>\n",
            "<ul>\n",
            "<li>mobile</li>\n",
            "</ul>\n",
            "</ul>\n",
            "<li>hiring</li>\n",
            "<ul>\n",
            "<li>two interviews booked</li>\n",
            "</ul>\n",
            "</ul>\n",
            "<br/>\n",
            "<p>Action items are tracked in the shared sheet and reviewed on Monday.</p>\n",
            "<br/>\n",
        )
    );
    assert_eq!(max_list_depth(&fragment), 3);
}

#[test]
fn test_list_depth_follows_indentation() {
    let cases = [
        ("-a\n-b", 1),
        ("-a\n -b\n-c", 2),
        ("-a\n  -b\n    -c\n      -d", 4),
        ("-a\n -b\n-c\n -d", 2),
    ];

    for (notes, depth) in cases {
        assert_eq!(max_list_depth(&notes_to_fragment(notes)), depth, "for {:?}", notes);
    }
}

#[test]
fn test_empty_fixture() {
    let html = convert_file(get_fixture_path("empty.notes"), &ConvertOptions { fragment: true }).unwrap();
    assert_eq!(html, "<br/>\n");
}

#[test]
fn test_html_fixture_passes_through() {
    let original = std::fs::read_to_string(get_fixture_path("weekly.html")).unwrap();
    let html = convert_file(get_fixture_path("weekly.html"), &ConvertOptions::default()).unwrap();
    assert_eq!(html, original);
}

#[cfg(feature = "markdown")]
#[test]
fn test_markdown_fixture() {
    let html = convert_file(get_fixture_path("weekly.md"), &ConvertOptions::default()).unwrap();
    assert_eq!(texts(&html, "h1"), vec!["Weekly sync"]);
    assert_eq!(texts(&html, "li"), vec!["release planning", "hiring"]);
}

#[test]
fn test_driver_consumes_all_input() {
    let inputs = ["", "x", "-a\n  b\n -c\n\nTEXT\nmore", "   \n\t\n-\n--\nA:B"];
    for input in inputs {
        let lines = to_lines(input);
        let result = NotesParser.parse(LineCursor::new(&lines));
        assert!(result.remaining.is_empty(), "left input for {:?}", input);
    }
}

#[test]
fn test_load_config_fixture() {
    struct NoPrompt;

    impl Prompter for NoPrompt {
        fn prompt(&mut self, field: &str, _sensitive: bool) -> std::io::Result<String> {
            panic!("unexpected prompt for {}", field);
        }
    }

    let loader = ConfigLoaderBuilder::new().path(get_fixture_path("config.txt")).build();
    let config = loader.load(&mut NoPrompt).unwrap();
    let sync = SyncConfig::from_config(&config).unwrap();

    assert_eq!(sync.password, "correct horse");
    assert_eq!(sync.application_name, "notes-sync");

    let page = MinutesPage::today(&sync.meeting_minutes).unwrap();
    assert!(page.path.starts_with("/meetings/minutes/minutes-for-"));
}
