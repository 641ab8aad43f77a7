// Copyright 2026 The glossbank developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use pulldown_cmark::Options;
use pulldown_cmark::Parser;
use pulldown_cmark::html::push_html;

/// Convert Markdown to HTML. Used for author-facing prose such as the
/// markup syntax guides.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(markdown, options);
    let mut html = String::new();
    push_html(&mut html, parser);
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_code() {
        let html = markdown_to_html("Use `[...]` to create a blank.");
        assert_eq!(
            html,
            "<p>Use <code>[...]</code> to create a blank.</p>\n"
        );
    }

    #[test]
    fn test_paragraphs() {
        let html = markdown_to_html("First line.\n\nSecond line.");
        assert_eq!(html, "<p>First line.</p>\n<p>Second line.</p>\n");
    }
}
