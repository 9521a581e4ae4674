use maud::{html, Markup, PreEscaped, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2937; background: #f9fafb; }
header { display: flex; align-items: center; gap: 12px; padding: 12px 24px; background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
main { max-width: 1200px; margin: 0 auto; padding: 24px; }
.card { background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px 20px; margin-bottom: 24px; }
.table-scroll { max-height: 420px; overflow: auto; border: 1px solid #e5e7eb; border-radius: 6px; }
table { border-collapse: collapse; width: 100%; font-size: 14px; }
th { position: sticky; top: 0; background: #f3f4f6; text-align: left; }
th, td { padding: 6px 10px; border-bottom: 1px solid #e5e7eb; white-space: nowrap; }
.model { display: flex; gap: 24px; padding: 12px 0; border-bottom: 1px solid #e5e7eb; }
.model dl { display: grid; grid-template-columns: max-content auto; gap: 4px 12px; margin: 0; }
.model dt { font-weight: 600; }
.model-image { width: 360px; min-height: 120px; color: #6b7280; }
.model-image img { max-width: 100%; border-radius: 6px; }
select { padding: 6px; font-size: 15px; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
                script src=(HTMX_SRC) defer {};
            }
            body {
                header {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        rect x="7" y="2" width="10" height="20" rx="2" {}
                        path d="M11 18h2" {}
                    }
                    h3 { (title) }
                }
                (content)
            }
        }
    }
}
