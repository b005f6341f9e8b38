use crate::view::{Document, Root, View};
use yew::{function_component, html, AttrValue, Html, LocalServerRenderer, Properties};

pub struct AppProps<'a> {
    pub document: &'a Document,
    pub root: &'a Root,
    pub lang: AttrValue,
}

pub fn app(props: AppProps<'_>) -> Html {
    let style = Html::from_html_unchecked(
        r#"
        :root {
            --color-dark: #222222;
            --color-regular: #757575;
            --color-light: #9e9e9e;
            --color-line: #eeeeee;
        }

        html, body {
            margin: 0;
            height: 100%;
            font-family: "Apple SD Gothic Neo", "Noto Sans KR", "Helvetica Neue", Arial, sans-serif;
            color: var(--color-dark);
            background-color: white;
        }

        .root {
            height: 100%;
            overflow: hidden;
        }

        .font-color-dark { color: var(--color-dark); }
        .font-color-regular { color: var(--color-regular); }
        .font-color-light { color: var(--color-light); }
        .font-medium { font-weight: 500; }
        .font-text-title { font-size: 1.25rem; }
        .font-text-body1 { font-size: 1rem; }
        .font-text-body2 { font-size: 0.9375rem; line-height: 1.6; }
        .font-text-body3, .font-number-body3 { font-size: 0.8125rem; }

        .page-slider {
            width: 100%;
            height: 100%;
            overflow: hidden;
        }

        .page-slider-track {
            display: flex;
            flex-direction: row;
            width: 100%;
            height: 100%;
        }

        .page-slider-page {
            flex: 0 0 100%;
            height: 100%;
            overflow-y: auto;
        }

        .list-board {
            margin: 0;
            padding: 0;
            list-style: none;
        }

        .list-board-item > a {
            display: block;
            padding: 1rem 1.25rem;
            border-bottom: 1px solid var(--color-line);
            text-decoration: none;
            cursor: pointer;
        }

        .header-custom-content {
            display: flex;
            flex-direction: row;
            align-items: center;
            justify-content: space-between;
            gap: 1rem;
        }

        .header-custom-text > p {
            margin: 0.125rem 0;
        }

        .text-post {
            padding: 1.5rem 1.25rem;
        }

        .text-post-header {
            padding-bottom: 1rem;
            border-bottom: 1px solid var(--color-line);
        }

        .text-post-title, .text-post-subtitle {
            margin: 0.25rem 0;
        }

        .text-post-contents img {
            max-width: 100%;
            height: auto;
        }

        .text-post-footer {
            margin-top: 2rem;
            text-align: right;
        }

        .empty-page {
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            gap: 1rem;
            height: 100%;
        }
    "#
        .into(),
    );

    html! {
        <html lang={props.lang.clone()}>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{props.document.title()}</title>
                <style>{style}</style>
            </head>
            <body>
                {props.root.view()}
            </body>
        </html>
    }
}

/// Renders the whole document, as it looks right now, to an HTML string.
pub fn render_html(props: AppProps<'_>) -> String {
    let html = render_fragment(app(props));

    let mut options = markup_fmt::config::FormatOptions::default();
    options.layout.use_tabs = true;
    options.layout.indent_width = 1;
    let mut html =
        match markup_fmt::format_text(&html, markup_fmt::Language::Html, &options, |code, _| {
            Ok::<_, std::convert::Infallible>(code.into())
        }) {
            Ok(formatted) => formatted,
            Err(e) => {
                log::warn!("couldn't format html: {e:?}");
                html
            }
        };

    html.insert_str(0, "<!DOCTYPE html>\n");

    html.lines()
        .filter(|l| !l.chars().all(|c| c.is_whitespace()))
        .map(|l| format!("{l}\n"))
        .collect()
}

/// Renders a node without the document shell or formatting.
pub fn render_fragment(html: Html) -> String {
    #[derive(Properties, PartialEq)]
    struct InnerAppProps {
        html: Html,
    }

    #[function_component(InnerApp)]
    fn inner_app(props: &InnerAppProps) -> Html {
        props.html.clone()
    }

    let renderer =
        LocalServerRenderer::<InnerApp>::with_props(InnerAppProps { html }).hydratable(false);
    futures::executor::block_on(renderer.render())
}
