use axum::{extract::State, response::Html};

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};
use umami_core::domain::stats::{ports::StatsService, value_objects::CuisineCount};

#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    summary = "Cuisine stats dashboard",
    description = "HTML bar chart of question counts per cuisine",
    responses(
        (status = 200, description = "Bar chart page", content_type = "text/html", body = String)
    ),
)]
pub async fn get_stats(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let counts = state
        .service
        .get_cuisine_stats()
        .await
        .map_err(ApiError::from)?;

    Ok(Html(render_stats_page(&counts)))
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn render_stats_page(counts: &[CuisineCount]) -> String {
    if counts.is_empty() {
        return "<h3>Нет данных</h3>".to_string();
    }

    let max_count = counts.iter().map(|c| c.count).max().unwrap_or(1).max(1);

    let rows = counts
        .iter()
        .map(|c| {
            let percent = c.count * 100 / max_count;
            format!(
                r#"<div class="row"><span class="label">{}</span><div class="bar" style="width: {}%">{}</div></div>"#,
                escape_html(&c.cuisine),
                percent,
                c.count
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="ru">
<head>
<meta charset="utf-8">
<title>Статистика по кухням</title>
<style>
body {{ font-family: sans-serif; max-width: 700px; margin: 2em auto; }}
.row {{ display: flex; align-items: center; margin: 0.4em 0; }}
.label {{ width: 10em; text-align: right; padding-right: 0.6em; }}
.bar {{ background: #4c78a8; color: #fff; padding: 0.2em 0.5em; border-radius: 3px; min-width: 1.5em; }}
</style>
</head>
<body>
<h2>Количество вопросов по кухням</h2>
<div class="chart">
{rows}
</div>
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_counts_render_no_data_heading() {
        assert_eq!(render_stats_page(&[]), "<h3>Нет данных</h3>");
    }

    #[test]
    fn bars_are_scaled_to_the_largest_count() {
        let counts = vec![
            CuisineCount {
                cuisine: "Японская".to_string(),
                count: 4,
            },
            CuisineCount {
                cuisine: "Итальянская".to_string(),
                count: 2,
            },
        ];

        let page = render_stats_page(&counts);

        assert!(page.contains("width: 100%"));
        assert!(page.contains("width: 50%"));
        assert!(page.contains("Японская"));
    }

    #[test]
    fn cuisine_names_are_html_escaped() {
        let counts = vec![CuisineCount {
            cuisine: "<script>".to_string(),
            count: 1,
        }];

        let page = render_stats_page(&counts);

        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>"));
    }
}
