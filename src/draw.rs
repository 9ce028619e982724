// Window presentation. Each output image gets its own window; the pixels
// are packed into 0x00RRGGBB buffers for minifb.

use image::{GrayImage, RgbImage};
use minifb::{Key, Window, WindowOptions};

use crate::error::Error;
use crate::types::IrImage;

pub struct Display {
    window: Window,
    // Reused between frames so presenting never reallocates.
    buf: Vec<u32>,
}

impl Display {
    /// Create a window sized to one output image.
    /// Visual: an empty window appears with the given title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self {
            window,
            buf: vec![0; width * height],
        })
    }

    /// Push a color image to the screen.
    pub fn present_rgb(&mut self, img: &RgbImage) -> Result<(), Error> {
        for (slot, px) in self.buf.iter_mut().zip(img.pixels()) {
            let [r, g, b] = px.0;
            *slot = (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b);
        }
        self.update(img.width() as usize, img.height() as usize)
    }

    /// Push a normalized [0,1] intensity image as grayscale.
    pub fn present_gray_f32(&mut self, img: &IrImage) -> Result<(), Error> {
        for (slot, px) in self.buf.iter_mut().zip(img.pixels()) {
            let v = (px.0[0].clamp(0.0, 1.0) * 255.0) as u32;
            *slot = (v << 16) | (v << 8) | v;
        }
        self.update(img.width() as usize, img.height() as usize)
    }

    /// Push an 8-bit grayscale image (the mask view).
    pub fn present_gray(&mut self, img: &GrayImage) -> Result<(), Error> {
        for (slot, px) in self.buf.iter_mut().zip(img.pixels()) {
            let v = u32::from(px.0[0]);
            *slot = (v << 16) | (v << 8) | v;
        }
        self.update(img.width() as usize, img.height() as usize)
    }

    /// Returns false when the user closes the window (stops the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True when the quit key is down; checked between ticks only, so an
    /// in-progress tick always finishes.
    pub fn quit_pressed(&self) -> bool {
        self.window.is_key_down(Key::Q) || self.window.is_key_down(Key::Escape)
    }

    fn update(&mut self, width: usize, height: usize) -> Result<(), Error> {
        self.window
            .update_with_buffer(&self.buf, width, height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }
}
