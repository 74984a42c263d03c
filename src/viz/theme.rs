//! Dark chart theme shared by the line and pie renderers.

use plotters::style::RGBColor;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: RGBColor,
    pub text: RGBColor,
    pub muted_text: RGBColor,
    pub grid: RGBColor,
    pub axis: RGBColor,
    /// Slice separators and other strokes drawn "in" the background color.
    pub separator: RGBColor,
    pub palette: &'static [RGBColor],
}

/// Qualitative palette used for series and slices, in assignment order.
const DARK_PALETTE: [RGBColor; 10] = [
    RGBColor(99, 110, 250),  // #636EFA
    RGBColor(239, 85, 59),   // #EF553B
    RGBColor(0, 204, 150),   // #00CC96
    RGBColor(171, 99, 250),  // #AB63FA
    RGBColor(255, 161, 90),  // #FFA15A
    RGBColor(25, 211, 243),  // #19D3F3
    RGBColor(255, 102, 146), // #FF6692
    RGBColor(182, 232, 128), // #B6E880
    RGBColor(255, 151, 255), // #FF97FF
    RGBColor(254, 203, 82),  // #FECB52
];

pub const DARK: Theme = Theme {
    background: RGBColor(17, 17, 17),
    text: RGBColor(242, 245, 250),
    muted_text: RGBColor(170, 176, 186),
    grid: RGBColor(40, 52, 66),
    axis: RGBColor(80, 103, 132),
    separator: RGBColor(17, 17, 17),
    palette: &DARK_PALETTE,
};

impl Theme {
    /// Color for the `idx`-th series or slice; wraps around the palette.
    #[inline]
    pub fn color(&self, idx: usize) -> RGBColor {
        self.palette[idx % self.palette.len()]
    }
}
