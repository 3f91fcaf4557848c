use super::*;

fn empty_db() -> Arc<usvg::fontdb::Database> {
    Arc::new(usvg::fontdb::Database::new())
}

#[test]
fn escape_xml_handles_markup_characters() {
    assert_eq!(escape_xml("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&apos;");
    assert_eq!(escape_xml("plain · text"), "plain · text");
}

#[test]
fn svg_centers_both_lines() {
    let svg = title_svg(Canvas::new(200, 100).unwrap(), &TitleText::default());
    assert!(svg.contains(r#"width="200" height="100""#));
    assert_eq!(svg.matches(r#"x="100""#).count(), 2);
    assert!(svg.contains(r#"y="44""#));
    assert!(svg.contains(r#"y="80""#));
}

#[test]
fn blank_text_yields_transparent_layer() {
    let canvas = Canvas::new(32, 16).unwrap();
    let text = TitleText {
        title: String::new(),
        subtitle: "  ".to_string(),
    };
    let layer = title_layer(canvas, &text, empty_db()).unwrap();
    assert_eq!(layer.len(), 32 * 16 * 4);
    assert!(layer.iter().all(|&b| b == 0));
}

#[test]
fn missing_fonts_leave_layer_empty() {
    let canvas = Canvas::new(64, 32).unwrap();
    let layer = title_layer(canvas, &TitleText::default(), empty_db()).unwrap();
    assert_eq!(layer.len(), 64 * 32 * 4);
    assert!(layer.iter().all(|&b| b == 0));
}

#[test]
fn text_stays_in_heading_band() {
    let canvas = Canvas::new(320, 240).unwrap();
    let layer = title_layer(canvas, &TitleText::default(), system_fontdb()).unwrap();
    for (i, px) in layer.chunks_exact(4).enumerate() {
        let y = i / 320;
        if y >= 130 {
            assert_eq!(px[3], 0, "unexpected ink at row {y}");
        }
    }
}
