//! Bresenham line drawing.

use tine_core::{Color, Image};

/// Draw a segment from (x0, y0) to (x1, y1), both endpoints included.
///
/// Steep lines are drawn with the axes swapped so that exactly one pixel is
/// written per step along the major axis, giving an 8-connected line.
/// Pixels outside the image are skipped. Returns the number of pixels
/// written.
pub fn draw_line(image: &mut Image, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) -> usize {
    let (mut x0, mut y0, mut x1, mut y1) = (x0, y0, x1, y1);

    let steep = (y0 - y1).abs() > (x0 - x1).abs();
    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }

    // Always sweep left to right
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let derror2 = 2 * (y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut error2 = 0;
    let mut y = y0;
    let mut written = 0;

    for x in x0..=x1 {
        let drawn = if steep {
            image.set(y, x, color)
        } else {
            image.set(x, y, color)
        };
        written += drawn as usize;

        error2 += derror2;
        if error2 > dx {
            y += sy;
            error2 -= 2 * dx;
        }
    }

    written
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_pixels(image: &Image) -> Vec<(i32, i32)> {
        let mut lit = Vec::new();
        for y in 0..image.height() as i32 {
            for x in 0..image.width() as i32 {
                if image.get(x, y) == Color::WHITE {
                    lit.push((x, y));
                }
            }
        }
        lit.sort();
        lit
    }

    #[test]
    fn test_horizontal_line() {
        let mut image = Image::new(10, 10);
        assert_eq!(draw_line(&mut image, 0, 0, 5, 0, Color::WHITE), 6);
        let expected: Vec<_> = (0..=5).map(|x| (x, 0)).collect();
        assert_eq!(lit_pixels(&image), expected);
    }

    #[test]
    fn test_vertical_line() {
        let mut image = Image::new(10, 10);
        assert_eq!(draw_line(&mut image, 0, 0, 0, 5, Color::WHITE), 6);
        let expected: Vec<_> = (0..=5).map(|y| (0, y)).collect();
        assert_eq!(lit_pixels(&image), expected);
    }

    #[test]
    fn test_diagonal_line() {
        let mut image = Image::new(10, 10);
        draw_line(&mut image, 0, 0, 3, 3, Color::WHITE);
        assert_eq!(lit_pixels(&image), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_single_point() {
        let mut image = Image::new(4, 4);
        assert_eq!(draw_line(&mut image, 2, 1, 2, 1, Color::WHITE), 1);
        assert_eq!(lit_pixels(&image), vec![(2, 1)]);
    }

    #[test]
    fn test_endpoint_order_does_not_matter() {
        let mut a = Image::new(20, 20);
        let mut b = Image::new(20, 20);
        draw_line(&mut a, 13, 2, 1, 17, Color::WHITE);
        draw_line(&mut b, 1, 17, 13, 2, Color::WHITE);
        assert_eq!(lit_pixels(&a), lit_pixels(&b));
    }

    #[test]
    fn test_lines_are_connected() {
        let cases = [
            (0, 0, 9, 4),
            (0, 9, 4, 0),
            (2, 1, 5, 18),
            (19, 3, 0, 7),
            (7, 19, 8, 0),
        ];
        for (x0, y0, x1, y1) in cases {
            let mut image = Image::new(20, 20);
            let written = draw_line(&mut image, x0, y0, x1, y1, Color::WHITE);
            let lit = lit_pixels(&image);

            // One pixel per step along the major axis
            let major = (x1 - x0).abs().max((y1 - y0).abs()) as usize + 1;
            assert_eq!(written, major);
            assert_eq!(lit.len(), major);
            assert!(lit.contains(&(x0, y0)) && lit.contains(&(x1, y1)));

            // Every pixel except the ends has an 8-connected neighbour on both sides
            for &(x, y) in &lit {
                let neighbours = lit
                    .iter()
                    .filter(|&&(nx, ny)| {
                        (nx, ny) != (x, y) && (nx - x).abs() <= 1 && (ny - y).abs() <= 1
                    })
                    .count();
                let is_end = (x, y) == (x0, y0) || (x, y) == (x1, y1);
                assert!(neighbours >= if is_end { 1 } else { 2 }, "gap at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_clipped_line() {
        let mut image = Image::new(4, 4);
        let written = draw_line(&mut image, -3, 1, 6, 1, Color::WHITE);
        assert_eq!(written, 4);
        assert_eq!(lit_pixels(&image), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
    }
}
