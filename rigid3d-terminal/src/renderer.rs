//! Coloured matrix printer for terminal output

use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::base::storage::RawStorage;
use nalgebra::{Dim, Matrix};
use rigid3d_core::Expr;
use std::io::Write;

/// Values closer than this to 0 or 1 are highlighted as such
const HIGHLIGHT_EPSILON: f64 = 1e-12;

/// A matrix entry that knows how to present itself
pub trait Cell {
    fn text(&self, precision: usize) -> String;
    fn color(&self) -> Color;
}

impl Cell for f64 {
    fn text(&self, precision: usize) -> String {
        // Adding 0.0 turns -0.0 into 0.0
        format!("{:.*}", precision, self + 0.0)
    }

    fn color(&self) -> Color {
        if self.abs() < HIGHLIGHT_EPSILON {
            Color::DarkGrey
        } else if (self - 1.0).abs() < HIGHLIGHT_EPSILON {
            Color::Cyan
        } else if *self < 0.0 {
            Color::Yellow
        } else {
            Color::White
        }
    }
}

impl Cell for Expr {
    fn text(&self, precision: usize) -> String {
        match self.as_constant() {
            Some(value) => value.text(precision),
            None => self.to_string(),
        }
    }

    fn color(&self) -> Color {
        match self.as_constant() {
            Some(value) => value.color(),
            None => Color::Green,
        }
    }
}

/// Renders matrices as aligned, bracketed rows
pub struct MatrixRenderer {
    precision: usize,
}

impl MatrixRenderer {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    pub fn draw_title<W: Write>(&self, writer: &mut W, title: &str) -> std::io::Result<()> {
        writer.queue(SetForegroundColor(Color::Yellow))?;
        writer.queue(Print(title))?;
        writer.queue(Print('\n'))?;
        writer.queue(ResetColor)?;
        Ok(())
    }

    pub fn draw<T, R, C, S, W>(&self, writer: &mut W, matrix: &Matrix<T, R, C, S>) -> std::io::Result<()>
    where
        T: Cell,
        R: Dim,
        C: Dim,
        S: RawStorage<T, R, C>,
        W: Write,
    {
        let (rows, cols) = matrix.shape();
        let cells: Vec<Vec<(String, Color)>> = (0..rows)
            .map(|i| {
                (0..cols)
                    .map(|j| {
                        let cell = &matrix[(i, j)];
                        (cell.text(self.precision), cell.color())
                    })
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = (0..cols)
            .map(|j| cells.iter().map(|row| row[j].0.chars().count()).max().unwrap_or(0))
            .collect();

        for row in &cells {
            writer.queue(Print("[ "))?;
            for (j, (text, color)) in row.iter().enumerate() {
                if j > 0 {
                    writer.queue(Print("  "))?;
                }
                writer.queue(SetForegroundColor(*color))?;
                writer.queue(Print(format!("{:>width$}", text, width = widths[j])))?;
                writer.queue(ResetColor)?;
            }
            writer.queue(Print(" ]\n"))?;
        }
        Ok(())
    }
}

impl Default for MatrixRenderer {
    fn default() -> Self {
        Self::new(4)
    }
}
