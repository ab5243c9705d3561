/// Read access to a row-major image with an arbitrary row stride.
///
/// `stride` counts elements of `Pixel` between consecutive rows; for
/// interleaved colour buffers one pixel spans several elements, so rows
/// returned by [`ImageView::row`] are `width * channels` long.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn stride(&self) -> usize;

    /// Number of interleaved elements per pixel.
    fn channels(&self) -> usize {
        1
    }

    fn row(&self, y: usize) -> &[Self::Pixel];

    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

pub trait ImageViewMut: ImageView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel];
}
