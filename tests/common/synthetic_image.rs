use court_tracker::image::RgbFrame;

pub const GRASS: [u8; 3] = [30, 110, 50];
pub const LINE: [u8; 3] = [250, 250, 250];

/// Outer court boundary of a synthetic frame, in pixels.
#[derive(Clone, Copy, Debug)]
pub struct CourtRect {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl CourtRect {
    pub fn corners(&self) -> [[f32; 2]; 4] {
        [
            [self.x0 as f32, self.y0 as f32],
            [self.x1 as f32, self.y0 as f32],
            [self.x1 as f32, self.y1 as f32],
            [self.x0 as f32, self.y1 as f32],
        ]
    }

    /// Pixel row of a court-relative `y`.
    pub fn row_at(&self, court_y: f32) -> f32 {
        self.y0 as f32 + court_y * (self.y1 - self.y0) as f32
    }

    pub fn column_at(&self, court_x: f32) -> f32 {
        self.x0 as f32 + court_x * (self.x1 - self.x0) as f32
    }
}

/// Frame-on-grass with a white rectangular court outline plus a centre line.
pub fn court_frame(width: usize, height: usize, rect: CourtRect, thickness: usize) -> RgbFrame {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(rect.x1 <= width && rect.y1 <= height, "court must fit the frame");

    let mut frame = RgbFrame::filled(width, height, GRASS);
    let mid_x = (rect.x0 + rect.x1) / 2;
    for y in rect.y0..rect.y1 {
        for x in rect.x0..rect.x1 {
            let border = x < rect.x0 + thickness
                || x >= rect.x1 - thickness
                || y < rect.y0 + thickness
                || y >= rect.y1 - thickness;
            let centre = x >= mid_x && x < mid_x + thickness;
            if border || centre {
                frame.put_pixel(x as i64, y as i64, LINE);
            }
        }
    }
    frame
}

pub fn default_court() -> (RgbFrame, CourtRect) {
    let rect = CourtRect {
        x0: 80,
        y0: 60,
        x1: 560,
        y1: 420,
    };
    (court_frame(640, 480, rect, 3), rect)
}
