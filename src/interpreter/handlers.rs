// Shape handlers: one function per drawable command
//
// Handlers assume the dispatcher already checked that the grid is initialized where
// needed. A short argument slice is reported as `WrongArity`. Each one either
// completes its mutation or leaves the canvas untouched.

use crate::canvas::{raster, Canvas, CanvasError, Plot};
use crate::command::Command;
use crate::interpreter::errors::CommandError;

fn too_few(kind: Command, args: &[i32]) -> CommandError {
    CommandError::WrongArity {
        name: kind.to_string(),
        expected: kind.arity(),
        got: args.len(),
    }
}

/// `CHAR c`: change the draw character
pub fn set_character(canvas: &mut Canvas, args: &[i32]) -> Result<(), CommandError> {
    let &[code, ..] = args else {
        return Err(too_few(Command::Char, args));
    };
    let c = u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .ok_or(CommandError::InvalidCharacter(code))?;
    canvas.set_draw_char(c);
    Ok(())
}

/// `GRID width,height`
pub fn grid_init(canvas: &mut Canvas, args: &[i32]) -> Result<(), CommandError> {
    let &[width, height, ..] = args else {
        return Err(too_few(Command::Grid, args));
    };
    canvas.initialize(width, height)?;
    Ok(())
}

/// `CLEAR`
pub fn clear(canvas: &mut Canvas) -> Result<(), CommandError> {
    canvas.clear()?;
    Ok(())
}

/// `DISPLAY`: the rendered grid, ready to be written out
pub fn display(canvas: &Canvas) -> Result<String, CanvasError> {
    canvas.render()
}

/// `POINT x,y`
pub fn point(canvas: &mut Canvas, args: &[i32]) -> Result<(), CommandError> {
    let &[x, y, ..] = args else {
        return Err(too_few(Command::Point, args));
    };
    canvas.plot(x, y);
    Ok(())
}

/// `LINE x1,y1,x2,y2`
pub fn line(canvas: &mut Canvas, args: &[i32]) -> Result<(), CommandError> {
    let &[x1, y1, x2, y2, ..] = args else {
        return Err(too_few(Command::Line, args));
    };
    raster::line(canvas, x1, y1, x2, y2);
    Ok(())
}

/// `CIRCLE x,y,radius`
pub fn circle(canvas: &mut Canvas, args: &[i32]) -> Result<(), CommandError> {
    let &[x, y, radius, ..] = args else {
        return Err(too_few(Command::Circle, args));
    };
    if radius < 0 {
        return Err(CommandError::NegativeRadius(radius));
    }
    raster::circle(canvas, x, y, radius);
    Ok(())
}

/// `RECTANGLE x1,y1,x2,y2`
///
/// Walks the corners in a fixed order: along the top edge to `(x1 + |x2 - x1|, y1)`,
/// down to `(x2, y2)`, back to `(x1, y1 + |y2 - y1|)` and up to the start. When
/// `(x1, y1)` is not the top-left corner this walk produces diagonal edges; that
/// output is kept as is.
pub fn rectangle(canvas: &mut Canvas, args: &[i32]) -> Result<(), CommandError> {
    let &[x1, y1, x2, y2, ..] = args else {
        return Err(too_few(Command::Rectangle, args));
    };
    let far_x = x1.saturating_add(x2.abs_diff(x1).min(i32::MAX as u32) as i32);
    let far_y = y1.saturating_add(y2.abs_diff(y1).min(i32::MAX as u32) as i32);

    raster::line(canvas, x1, y1, far_x, y1);
    raster::line(canvas, far_x, y1, x2, y2);
    raster::line(canvas, x2, y2, x1, far_y);
    raster::line(canvas, x1, far_y, x1, y1);
    Ok(())
}
