//! SVG overlay rendering for detected blobs.
//!
//! Produces a standalone SVG document that layers one ellipse per blob over
//! the source image: centered on the blob centroid (shifted by half a pixel
//! so it lands on pixel centers) with the coordinate standard deviations as
//! radii. Marker colors follow a fixed golden-angle hue walk, so adjacent
//! markers stay visually distinct and repeated runs produce byte-identical
//! output.

use crate::types::Blob;

/// Golden-angle hue step between consecutive markers, in degrees.
const HUE_STEP: f64 = 137.508;

/// Renders an SVG overlay document for `blobs`.
///
/// `image_href` is embedded verbatim as the `<image>` reference, so it is
/// resolved relative to wherever the SVG ends up.
pub fn render_svg(image_href: &str, width: usize, height: usize, blobs: &[Blob]) -> String {
    let mut svg = String::new();
    svg.push_str(
        "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \
         \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n",
    );
    svg.push_str(&format!(
        "<svg width=\"{width}\" height=\"{height}\" \
         xmlns=\"http://www.w3.org/2000/svg\" \
         xmlns:xlink=\"http://www.w3.org/1999/xlink\">\n"
    ));
    svg.push_str(&format!(
        "<image x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" \
         xlink:href=\"{image_href}\" />\n"
    ));

    for (i, blob) in blobs.iter().enumerate() {
        let hue = (i as f64 * HUE_STEP) % 360.0;
        svg.push_str(&format!(
            "<ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\" \
             style=\"stroke:hsl({:.1},90%,45%);stroke-width:2;fill:none\" />\n",
            blob.x + 0.5,
            blob.y + 0.5,
            blob.x_dev,
            blob.y_dev,
            hue,
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::render_svg;
    use crate::types::Blob;

    fn sample_blobs() -> Vec<Blob> {
        vec![
            Blob {
                x: 3.0,
                y: 4.0,
                x_dev: 1.5,
                y_dev: 0.5,
                weight: 12.0,
            },
            Blob {
                x: 10.0,
                y: 2.0,
                x_dev: 0.0,
                y_dev: 0.0,
                weight: 1.0,
            },
        ]
    }

    #[test]
    fn one_ellipse_per_blob() {
        let svg = render_svg("frame.png", 16, 8, &sample_blobs());
        assert_eq!(svg.matches("<ellipse ").count(), 2);
        assert!(svg.contains("xlink:href=\"frame.png\""));
        assert!(svg.contains("width=\"16\" height=\"8\""));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn markers_are_centered_on_pixel_centers() {
        let svg = render_svg("frame.png", 16, 8, &sample_blobs());
        assert!(svg.contains("cx=\"3.5\" cy=\"4.5\""));
        assert!(svg.contains("rx=\"1.5\" ry=\"0.5\""));
    }

    #[test]
    fn rendering_is_deterministic() {
        let blobs = sample_blobs();
        let a = render_svg("frame.png", 16, 8, &blobs);
        let b = render_svg("frame.png", 16, 8, &blobs);
        assert_eq!(a, b);
    }
}
