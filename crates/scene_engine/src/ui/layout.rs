//! UI layout calculations
//!
//! Places the children of a layout group inside the group's own rectangle.
//! Positions are offsets from the container's top-left corner, x to the right
//! and y downwards.

use crate::ecs::property_enum;
use crate::foundation::math::{Vec2, Vec4};

property_enum! {
    /// Axis along which a layout group places its children
    pub enum Orientation {
        /// Left to right
        #[default]
        Horizontal => "horizontal",
        /// Top to bottom
        Vertical => "vertical",
    }
}

property_enum! {
    /// How children are resized to fit the group along one axis
    pub enum Fitting {
        /// Keep children at their own size
        #[default]
        None => "none",
        /// Grow children to fill spare space
        Stretch => "stretch",
        /// Shrink children that would overflow
        Shrink => "shrink",
        /// Grow or shrink as needed
        Both => "both",
    }
}

impl Fitting {
    const fn stretches(self) -> bool {
        matches!(self, Self::Stretch | Self::Both)
    }

    const fn shrinks(self) -> bool {
        matches!(self, Self::Shrink | Self::Both)
    }
}

/// Inputs of one layout pass, copied out of a layout group
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Main axis
    pub orientation: Orientation,
    /// Place children in reverse order along the main axis
    pub reverse: bool,
    /// Where spare space goes: 0 = start, 0.5 = centre, 1 = end, per axis
    pub alignment: Vec2,
    /// Inner padding as (left, top, right, bottom)
    pub padding: Vec4,
    /// Gap between children (x) and between wrapped lines (y), per axis
    pub spacing: Vec2,
    /// Horizontal fitting
    pub width_fitting: Fitting,
    /// Vertical fitting
    pub height_fitting: Fitting,
    /// Start a new line when the main axis runs out of room
    pub wrap: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            reverse: false,
            alignment: Vec2::zeros(),
            padding: Vec4::zeros(),
            spacing: Vec2::zeros(),
            width_fitting: Fitting::None,
            height_fitting: Fitting::None,
            wrap: false,
        }
    }
}

impl LayoutOptions {
    const fn fitting(&self, axis: usize) -> Fitting {
        if axis == 0 {
            self.width_fitting
        } else {
            self.height_fitting
        }
    }
}

/// Final rectangle of one child
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Offset from the container's top-left corner
    pub position: Vec2,
    /// Size after fitting
    pub size: Vec2,
}

/// Layout calculator for layout groups
pub struct LayoutCalculator;

impl LayoutCalculator {
    /// Lay out `children` (their current sizes, in child order) inside a
    /// container of `container` size. Returns one placement per child, in the
    /// same order.
    pub fn calculate(options: &LayoutOptions, container: Vec2, children: &[Vec2]) -> Vec<Placement> {
        let main = match options.orientation {
            Orientation::Horizontal => 0,
            Orientation::Vertical => 1,
        };
        let cross = 1 - main;

        let origin = Vec2::new(options.padding.x, options.padding.y);
        let available = Vec2::new(
            (container.x - options.padding.x - options.padding.z).max(0.0),
            (container.y - options.padding.y - options.padding.w).max(0.0),
        );

        let mut order: Vec<usize> = (0..children.len()).collect();
        if options.reverse {
            order.reverse();
        }

        let lines = Self::break_lines(options, &order, children, main, available[main]);
        let single_line = lines.len() == 1;

        let mut placements: Vec<Placement> = children
            .iter()
            .map(|&size| Placement {
                position: Vec2::zeros(),
                size,
            })
            .collect();

        // Fit sizes line by line and measure each line's cross extent
        let mut line_extents = Vec::with_capacity(lines.len());
        for line in &lines {
            Self::fit_main_axis(options, line, &mut placements, main, available[main]);
            let extent = Self::fit_cross_axis(
                options,
                line,
                &mut placements,
                cross,
                available[cross],
                single_line,
            );
            line_extents.push(extent);
        }

        let gaps = |count: usize, gap: f32| gap * count.saturating_sub(1) as f32;
        let block_extent = line_extents.iter().sum::<f32>() + gaps(lines.len(), options.spacing[cross]);
        let mut cross_cursor =
            origin[cross] + options.alignment[cross] * (available[cross] - block_extent);

        for (line, extent) in lines.iter().zip(line_extents) {
            let line_total = line.iter().map(|&i| placements[i].size[main]).sum::<f32>()
                + gaps(line.len(), options.spacing[main]);
            let mut main_cursor =
                origin[main] + options.alignment[main] * (available[main] - line_total);

            for &index in line {
                let placement = &mut placements[index];
                placement.position[main] = main_cursor;
                placement.position[cross] =
                    cross_cursor + options.alignment[cross] * (extent - placement.size[cross]);
                main_cursor += placement.size[main] + options.spacing[main];
            }

            cross_cursor += extent + options.spacing[cross];
        }

        placements
    }

    fn break_lines(
        options: &LayoutOptions,
        order: &[usize],
        children: &[Vec2],
        main: usize,
        available_main: f32,
    ) -> Vec<Vec<usize>> {
        if !options.wrap {
            return vec![order.to_vec()];
        }

        let mut lines: Vec<Vec<usize>> = Vec::new();
        let mut current: Vec<usize> = Vec::new();
        let mut running = 0.0;

        for &index in order {
            let size = children[index][main];
            if !current.is_empty() && running + options.spacing[main] + size > available_main {
                lines.push(std::mem::take(&mut current));
                running = 0.0;
            }
            running += if current.is_empty() { size } else { options.spacing[main] + size };
            current.push(index);
        }

        if !current.is_empty() || lines.is_empty() {
            lines.push(current);
        }
        lines
    }

    fn fit_main_axis(
        options: &LayoutOptions,
        line: &[usize],
        placements: &mut [Placement],
        main: usize,
        available_main: f32,
    ) {
        if line.is_empty() {
            return;
        }

        let fitting = options.fitting(main);
        let spacing = options.spacing[main] * (line.len() - 1) as f32;
        let content: f32 = line.iter().map(|&i| placements[i].size[main]).sum();
        let room = (available_main - spacing).max(0.0);

        if content < room && fitting.stretches() {
            let extra = (room - content) / line.len() as f32;
            for &i in line {
                placements[i].size[main] += extra;
            }
        } else if content > room && fitting.shrinks() && content > 0.0 {
            let scale = room / content;
            for &i in line {
                placements[i].size[main] *= scale;
            }
        }
    }

    fn fit_cross_axis(
        options: &LayoutOptions,
        line: &[usize],
        placements: &mut [Placement],
        cross: usize,
        available_cross: f32,
        single_line: bool,
    ) -> f32 {
        let fitting = options.fitting(cross);
        let natural = line
            .iter()
            .map(|&i| placements[i].size[cross])
            .fold(0.0_f32, f32::max);
        let target = if single_line { available_cross } else { natural };

        for &i in line {
            let size = &mut placements[i].size[cross];
            if *size < target && fitting.stretches() {
                *size = target;
            }
            if *size > available_cross && fitting.shrinks() {
                *size = available_cross;
            }
        }

        line.iter()
            .map(|&i| placements[i].size[cross])
            .fold(0.0_f32, f32::max)
    }
}
