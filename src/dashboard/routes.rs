use super::{html, table};
use crate::config::Config;
use actix_web::{get, web, HttpResponse};

#[derive(Debug, Deserialize, Default)]
struct DashboardQuery {
    rows: Option<usize>,
    #[serde(default)]
    edit: bool,
    seed: Option<u64>,
}

impl DashboardQuery {
    fn resolve(&self, config: &Config) -> (usize, u64) {
        let rows = self
            .rows
            .unwrap_or(config.dashboard.default_rows)
            .max(1)
            .min(table::MAX_ROWS);
        let seed = self.seed.unwrap_or(config.dashboard.seed);
        (rows, seed)
    }
}

#[get("/dashboard")]
async fn dashboard(
    config: web::Data<Config>,
    query: web::Query<DashboardQuery>,
) -> HttpResponse {
    let query = query.into_inner();
    let (rows, seed) = query.resolve(config.get_ref());

    let data = table::generate(rows, seed);
    let table_html = html::render_table(&data, query.edit);
    let page = render_page(rows, query.edit, seed, &table_html);

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page)
}

#[get("/dashboard/data.json")]
async fn dashboard_data(
    config: web::Data<Config>,
    query: web::Query<DashboardQuery>,
) -> HttpResponse {
    let (rows, seed) = query.resolve(config.get_ref());
    HttpResponse::Ok().json(table::generate(rows, seed))
}

fn render_page(rows: usize, edit: bool, seed: u64, table_html: &str) -> String {
    let edit_checked = if edit { " checked" } else { "" };
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Dashboard</title></head>
<body>
<p>Got lots of data? Great! This view can show thousands of rows, images,
progress values &ndash; and even supports editing! &#9997;&#65039;</p>
<form method="get" action="/dashboard">
  <label>Number of rows
    <input type="range" name="rows" min="1" max="{max}" value="{rows}"
           oninput="this.nextElementSibling.value = this.value"
           onchange="this.form.submit()">
    <output>{rows}</output>
  </label>
  <label>Enable editing
    <input type="checkbox" name="edit" value="true"{edit_checked}
           onchange="this.form.submit()">
  </label>
  <input type="hidden" name="seed" value="{seed}">
</form>
{table}
</body>
</html>
"#,
        max = table::MAX_ROWS,
        rows = rows,
        edit_checked = edit_checked,
        seed = seed,
        table = table_html,
    )
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(dashboard);
    cfg.service(dashboard_data);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_count_is_clamped_to_the_slider_range() {
        let config = Config::default();
        let query = DashboardQuery {
            rows: Some(0),
            ..Default::default()
        };
        assert_eq!(query.resolve(&config).0, 1);

        let query = DashboardQuery {
            rows: Some(1_000_000),
            ..Default::default()
        };
        assert_eq!(query.resolve(&config).0, table::MAX_ROWS);
    }

    #[test]
    fn defaults_come_from_the_dashboard_config() {
        let config = Config::default();
        let query = DashboardQuery::default();
        assert_eq!(query.resolve(&config), (500, 42));
    }

    #[test]
    fn page_carries_slider_and_edit_toggle() {
        let page = render_page(500, false, 42, "<table></table>");
        assert!(page.contains("type=\"range\""));
        assert!(page.contains("max=\"10000\""));
        assert!(page.contains("type=\"checkbox\""));
        assert!(!page.contains("checked>"));

        let page = render_page(500, true, 42, "<table></table>");
        assert!(page.contains("checked"));
    }
}
