use sdl2::rect::Rect;

/// Clip rectangles of a sheet made of equally sized cells, row by row.
pub fn grid_clips(columns: u32, rows: u32, cell_width: u32, cell_height: u32) -> Vec<Rect> {
    let mut clips = Vec::with_capacity((columns * rows) as usize);
    for row in 0..rows {
        for column in 0..columns {
            clips.push(Rect::new(
                (column * cell_width) as i32,
                (row * cell_height) as i32,
                cell_width,
                cell_height,
            ));
        }
    }
    clips
}

/// Cycles through `frame_count` frames, holding each for `slowdown` updates.
#[derive(Clone, Debug)]
pub struct Animation {
    frame_count: u32,
    slowdown: u32,
    counter: u32,
}

impl Animation {
    pub fn new(frame_count: u32, slowdown: u32) -> Self {
        Self {
            frame_count: frame_count.max(1),
            slowdown: slowdown.max(1),
            counter: 0,
        }
    }

    pub fn frame(&self) -> usize {
        (self.counter / self.slowdown) as usize
    }

    pub fn advance(&mut self) {
        self.counter += 1;
        if self.counter >= self.frame_count * self.slowdown {
            self.counter = 0;
        }
    }
}
