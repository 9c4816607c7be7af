//! 终端二维码渲染

use qrcode::QrCode;
use qrcode::render::unicode::Dense1x2;

use crate::errors::Result;

/// 把文本渲染为 Unicode 半块字符二维码（带静区）
pub fn render_qr(text: &str) -> Result<String> {
    let code = QrCode::new(text.as_bytes())?;
    Ok(code
        .render::<Dense1x2>()
        .dark_color(Dense1x2::Light)
        .light_color(Dense1x2::Dark)
        .quiet_zone(true)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_qr_is_rectangular() {
        let rendered = render_qr("https://tinyurl.com/abc123").unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines.len() > 10);
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_render_qr_rejects_oversized_input() {
        let huge = "x".repeat(8000);
        assert!(render_qr(&huge).is_err());
    }
}
