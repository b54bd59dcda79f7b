use crate::readability::FetchConfig;

/// Builds the in-page extraction script.
///
/// The script runs in the browser context: it removes configured junk
/// elements, then tries the content selectors in priority order and
/// returns the first match with enough text, falling back to `<body>`.
pub struct ContentExtractor {
    config: FetchConfig,
}

impl ContentExtractor {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }

    pub fn extraction_script(&self) -> String {
        let remove_selectors = quote_selectors(&self.config.remove_selectors);
        let content_selectors = quote_selectors(&self.config.content_selectors);
        let min_length = self.config.min_content_length;

        format!(
            r#"
            (() => {{
                const removeSelectors = [{remove_selectors}];
                for (const selector of removeSelectors) {{
                    document.querySelectorAll(selector).forEach(el => el.remove());
                }}

                const contentSelectors = [{content_selectors}];
                for (const selector of contentSelectors) {{
                    const element = document.querySelector(selector);
                    if (element && element.innerText.trim().length > {min_length}) {{
                        return {{ html: element.innerHTML, selector: selector }};
                    }}
                }}

                const body = document.body;
                if (body && body.innerText.trim().length > {min_length}) {{
                    return {{ html: body.innerHTML, selector: 'body' }};
                }}

                return {{ html: '', selector: null }};
            }})()
            "#
        )
    }
}

fn quote_selectors(selectors: &[String]) -> String {
    selectors
        .iter()
        .map(|s| format!("'{}'", s.replace('\'', "\\'")))
        .collect::<Vec<_>>()
        .join(", ")
}
