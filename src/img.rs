use std::{path::{Path, PathBuf}, result};

use fltk::prelude::ImageExt;

use crate::{gray, my_err::MyError, pixel_pos::PixelPos};

#[derive(Clone)]
pub struct RasterImage {
    width: usize,
    height: usize,
    samples: Vec<f32>
}

impl RasterImage {
    pub fn empty_with_size(width: usize, height: usize) -> Self {
        let mut samples = Vec::<f32>::new();
        samples.resize(width * height, 0_f32);
        RasterImage { width, height, samples }
    }

    pub fn empty_size_of(other: &RasterImage) -> Self {
        Self::empty_with_size(other.w(), other.h())
    }

    pub fn from_samples(samples: Vec<f32>, width: usize, height: usize) -> Self {
        assert_eq!(samples.len(), width * height);
        RasterImage { width, height, samples }
    }

    pub fn load(path: PathBuf) -> result::Result<Self, MyError> {
        let im = fltk::image::SharedImage::load(path)?;

        if im.w() < 0 { return Err(MyError::new("Ширина загруженного изображения < 0".to_string())); }
        if im.h() < 0 { return Err(MyError::new("Высота загруженного изображения < 0".to_string())); }

        let width = im.w() as usize;
        let height = im.h() as usize;
        let values = im.to_rgb_data();

        let mut img = RasterImage::empty_with_size(width, height);

        match im.depth() {
            fltk::enums::ColorDepth::L8 => {
                assert_eq!(values.len(), width * height);
                for i in 0..values.len() {
                    img.samples[i] = gray::to_sample(gray::pack_rgb(values[i], values[i], values[i]));
                }
            },
            fltk::enums::ColorDepth::La8 => {
                assert_eq!(values.len() % 2, 0);
                for i in (0..values.len()).step_by(2) {
                    img.samples[i / 2] = gray::to_sample(gray::pack_rgb(values[i], values[i], values[i]));
                }
            },
            fltk::enums::ColorDepth::Rgb8 => {
                assert_eq!(values.len() % 3, 0);
                for i in (0..values.len()).step_by(3) {
                    img.samples[i / 3] = gray::to_sample(gray::pack_rgb(values[i], values[i + 1], values[i + 2]));
                }
            },
            fltk::enums::ColorDepth::Rgba8 => {
                assert_eq!(values.len() % 4, 0);
                for i in (0..values.len()).step_by(4) {
                    img.samples[i / 4] = gray::to_sample(gray::pack_rgb(values[i], values[i + 1], values[i + 2]));
                }
            }
        }

        Ok(img)
    }

    pub fn w(&self) -> usize { self.width }
    pub fn h(&self) -> usize { self.height }

    pub fn max_col(&self) -> usize { self.width - 1 }
    pub fn max_row(&self) -> usize { self.height - 1 }

    pub fn fits(&self, pos: PixelPos) -> bool {
        pos.col <= self.max_col() && pos.row <= self.max_row()
    }

    pub fn sample_at(&self, pos: PixelPos) -> f32 {
        if !self.fits(pos) {
            panic!("pos is {:?} which is doesn't fit into {}, {}", pos, self.max_col(), self.max_row());
        }
        self.samples[pos.row * self.width + pos.col]
    }

    pub fn set_sample(&mut self, pos: PixelPos, value: f32) {
        if !self.fits(pos) {
            panic!("pos is {:?} which is doesn't fit into {}, {}", pos, self.max_col(), self.max_row());
        }
        self.samples[pos.row * self.width + pos.col] = value;
    }

    pub fn samples<'own>(&'own self) -> &'own Vec<f32> {
        &self.samples
    }

    pub fn get_pixels_iter(&self) -> PixelsIter {
        PixelsIter::for_full_image(self)
    }

    pub fn get_drawable_copy(&self) -> Result<fltk::image::RgbImage, MyError> {
        let bytes: Vec<u8> = self.samples.iter()
            .map(|s| (gray::from_sample(*s) & 0xFF) as u8)
            .collect();

        let im_rgb = fltk::image::RgbImage::new(bytes.as_slice(),
            self.width as i32, self.height as i32, fltk::enums::ColorDepth::L8)?;

        Ok(im_rgb)
    }

    pub fn save_png(&self, path: &Path) -> Result<(), MyError> {
        let mut bytes = Vec::<u8>::with_capacity(self.width * self.height * 3);

        for s in self.samples.iter() {
            let rgb = gray::from_sample(*s);
            bytes.push(((rgb >> 16) & 0xFF) as u8);
            bytes.push(((rgb >> 8) & 0xFF) as u8);
            bytes.push((rgb & 0xFF) as u8);
        }

        image::save_buffer(path, &bytes,
            self.width as u32, self.height as u32, image::ColorType::Rgb8)?;

        Ok(())
    }
}

pub struct PixelsIter {
    bottom_right_excluded: PixelPos,
    cur_pos: PixelPos
}

impl PixelsIter {
    pub fn for_full_image(img: &RasterImage) -> Self {
        PixelsIter {
            bottom_right_excluded: PixelPos::new(img.h(), img.w()),
            cur_pos: PixelPos::new(0, 0)
        }
    }

    pub fn fits(&self, pos: PixelPos) -> bool {
        pos.col < self.bottom_right_excluded.col && pos.row < self.bottom_right_excluded.row
    }
}

impl Iterator for PixelsIter {
    type Item = PixelPos;

    fn next(&mut self) -> Option<PixelPos> {
        let curr = self.cur_pos;

        self.cur_pos.col += 1;

        if self.cur_pos.col >= self.bottom_right_excluded.col {
            self.cur_pos.col = 0;
            self.cur_pos.row += 1;
        }

        if self.fits(curr) {
            Some(curr)
        } else {
            None
        }
    }
}
