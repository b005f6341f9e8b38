use crate::notice::ContentEntry;
use yew::{html, Html};

/// Renders parsed notice contents. Runs of list items share one `<ul>`.
pub fn content_html(entries: &[ContentEntry]) -> Html {
    let mut ret = Vec::<Html>::new();
    let mut list = Vec::<Html>::new();

    for entry in entries {
        if let ContentEntry::ListItem { text } = entry {
            list.push(html! { <li class="text-post-list-item">{text.clone()}</li> });
            continue;
        }
        if !list.is_empty() {
            ret.push(html! { <ul class="text-post-list">{for list.drain(..)}</ul> });
        }
        ret.push(entry_html(entry));
    }
    if !list.is_empty() {
        ret.push(html! { <ul class="text-post-list">{for list.drain(..)}</ul> });
    }

    ret.into_iter().collect()
}

fn entry_html(entry: &ContentEntry) -> Html {
    match entry {
        ContentEntry::Text { text } => plain_text_html(text),
        ContentEntry::Heading { text } => html! {
            <h3 class="text-post-heading font-text-body1 font-medium">{text.clone()}</h3>
        },
        ContentEntry::ListItem { text } => html! {
            <ul class="text-post-list"><li class="text-post-list-item">{text.clone()}</li></ul>
        },
        ContentEntry::Image { src, alt } => html! {
            <img class="text-post-image" src={src.clone()} alt={alt.clone()}/>
        },
        ContentEntry::Markdown { source } => {
            match markdown::to_html_with_options(source, &markdown::Options::gfm()) {
                Ok(rendered) => Html::from_html_unchecked(rendered.into()),
                Err(e) => {
                    log::warn!("couldn't render markdown, showing it as text: {e}");
                    plain_text_html(source)
                }
            }
        }
    }
}

fn plain_text_html(text: &str) -> Html {
    html! {
        <p class="text-post-paragraph">
            {for text.lines().enumerate().map(|(i, line)| html! {<>
                if i > 0 {
                    <br/>
                }
                {line.to_owned()}
            </>})}
        </p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::render_fragment;

    #[test]
    fn groups_consecutive_list_items() {
        let html = render_fragment(content_html(&[
            ContentEntry::text("Changes:"),
            ContentEntry::ListItem { text: "one".into() },
            ContentEntry::ListItem { text: "two".into() },
            ContentEntry::text("Thanks."),
            ContentEntry::ListItem { text: "three".into() },
        ]));

        assert_eq!(html.matches("<ul").count(), 2, "{html}");
        assert_eq!(html.matches("<li").count(), 3, "{html}");
        assert!(html.find("two").unwrap() < html.find("Thanks.").unwrap());
    }

    #[test]
    fn text_lines_become_breaks() {
        let html = render_fragment(content_html(&[ContentEntry::text("line one\nline two")]));
        assert_eq!(html.matches("<br").count(), 1, "{html}");
        assert!(html.contains("line one"), "{html}");
    }

    #[test]
    fn markdown_and_images() {
        let html = render_fragment(content_html(&[
            ContentEntry::Markdown {
                source: "**closed** on Monday".into(),
            },
            ContentEntry::Image {
                src: "/img/map.png".into(),
                alt: "detour map".into(),
            },
        ]));

        assert!(html.contains("<strong>closed</strong>"), "{html}");
        assert!(html.contains(r#"src="/img/map.png""#), "{html}");
        assert!(html.contains(r#"alt="detour map""#), "{html}");
    }

    #[test]
    fn markdown_raw_html_is_escaped() {
        let html = render_fragment(content_html(&[ContentEntry::Markdown {
            source: "<script>alert(1)</script>".into(),
        }]));
        assert!(!html.contains("<script>"), "{html}");
    }
}
