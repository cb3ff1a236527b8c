/// Speed multiplier while the band is at least the visibility threshold
/// on screen: near-frozen so the text stays legible.
pub const IN_VIEW_FACTOR: f32 = 0.1;
/// Speed multiplier while the band is off screen.
pub const OUT_VIEW_FACTOR: f32 = 1.0;

/// Extra width beyond the viewport over which a band repeats, px. Large
/// enough that the seam between duplicated copies never enters view.
pub const BAND_MARGIN: f32 = 500.0;

/// Per-band tuning.
#[derive(Clone, Copy, Debug)]
pub struct BandParams {
    /// How strongly scroll deltas advance the band.
    pub scroll_rate: f32,
    /// Constant advance per frame, independent of scrolling.
    pub drift: f32,
    /// Reversed bands translate in the opposite direction.
    pub reverse: bool,
}

impl Default for BandParams {
    fn default() -> Self {
        Self {
            scroll_rate: 1.0,
            drift: 0.0,
            reverse: false,
        }
    }
}

/// Scroll-phase accumulator for one marquee band.
///
/// The phase integrates scroll deltas (plus drift) scaled by the current
/// visibility speed factor, so flipping `in_view` changes only the rate of
/// future motion — the translation itself never jumps at the flip.
pub struct MarqueeBand {
    params: BandParams,
    phase: f32,
    last_scroll: Option<f32>,
    in_view: bool,
}

impl MarqueeBand {
    pub fn new(params: BandParams) -> Self {
        Self {
            params,
            phase: 0.0,
            last_scroll: None,
            in_view: false,
        }
    }

    pub fn in_view(&self) -> bool {
        self.in_view
    }

    pub fn set_in_view(&mut self, in_view: bool) {
        self.in_view = in_view;
    }

    pub fn speed_factor(&self) -> f32 {
        if self.in_view {
            IN_VIEW_FACTOR
        } else {
            OUT_VIEW_FACTOR
        }
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Advance one frame against the current scroll offset. The first call
    /// only seeds the baseline so a page loaded mid-scroll starts at rest.
    pub fn tick(&mut self, scroll_offset: f32) {
        let delta = match self.last_scroll {
            Some(prev) => scroll_offset - prev,
            None => 0.0,
        };
        self.last_scroll = Some(scroll_offset);
        self.phase += (delta * self.params.scroll_rate + self.params.drift) * self.speed_factor();
    }

    /// Horizontal translation in px, wrapped so the repeated band never shows
    /// a seam. Forward bands stay in `(-band_width, 0]`, reversed bands in
    /// `[-band_width, 0)`. A degenerate band width yields no motion.
    pub fn translation(&self, band_width: f32) -> f32 {
        if band_width <= 0.0 {
            return 0.0;
        }
        if self.params.reverse {
            self.phase.rem_euclid(band_width) - band_width
        } else {
            -self.phase.rem_euclid(band_width)
        }
    }
}
