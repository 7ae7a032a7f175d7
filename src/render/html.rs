use super::stat_row::StatRowView;

const IMAGE_HOST: &str = "https://www.bungie.net";

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn image_src(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!("{}{}", IMAGE_HOST, path)
    }
}

/// Renders a stat row as markup for the item popup.
pub fn render_row(row: &StatRowView) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        "<div class=\"{}\" title=\"{}\">",
        row.classes.join(" "),
        escape(&row.title)
    ));
    html.push_str(&format!(
        "<span class=\"stat-box-text stat-box-cell\">{}</span>",
        escape(&row.name)
    ));
    html.push_str(&format!(
        "<span class=\"stat-box-val stat-box-cell\">{}</span>",
        escape(&row.value)
    ));

    if let Some(unit) = &row.unit {
        html.push_str(&format!(
            "<span class=\"stat-box-cell stat-box-trailer\">{}</span>",
            escape(unit)
        ));
    }

    if let Some(icon) = &row.icon {
        html.push_str(&format!(
            "<span class=\"stat-box-cell stat-box-icon\"><img class=\"stat-icon\" src=\"{}\"></span>",
            escape(&image_src(icon))
        ));
    }

    if let Some(quality) = &row.quality {
        html.push_str(&format!(
            "<span class=\"stat-box-cell item-stat-quality stat-box-trailer\" style=\"color: {}\">({})</span>",
            quality.color,
            escape(&quality.range)
        ));
    }

    if let Some(recoil) = &row.recoil {
        html.push_str(&format!("<span class=\"stat-recoil\">{}</span>", recoil.to_svg()));
    }

    if let Some(fragments) = &row.bar {
        html.push_str("<span class=\"stat-box-outer\"><span class=\"stat-box-container\">");
        for fragment in fragments {
            let class = match fragment.category.css_class() {
                Some(extra) => format!("stat-box-inner {}", extra),
                None => "stat-box-inner".to_string(),
            };
            html.push_str(&format!(
                "<span class=\"{}\" style=\"width: {}%\"></span>",
                class, fragment.width_percent
            ));
        }
        html.push_str("</span></span>");
    }

    html.push_str("</div>");
    html
}
