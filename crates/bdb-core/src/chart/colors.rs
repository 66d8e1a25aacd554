use plotters::style::RGBColor;

pub const PDB_BROWN: RGBColor = RGBColor(185, 140, 106);
pub const BDB_BLUE: RGBColor = RGBColor(73, 89, 124);
pub const GRID_GREY: RGBColor = RGBColor(176, 176, 176);
