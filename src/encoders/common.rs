//! Helpers shared between all encoders

use image::ImageEncoder;
use log::debug;

use crate::image::Image;

pub fn write_icc_and_exif(encoder: &mut impl ImageEncoder, image: &Image) {
    if let Some(icc) = image.icc.clone() {
        if encoder.set_icc_profile(icc).is_err() {
            debug!("encoder does not support ICC profiles, dropping it");
        }
    };
    if let Some(exif) = image.exif.clone() {
        if encoder.set_exif_metadata(exif).is_err() {
            debug!("encoder does not support EXIF metadata, dropping it");
        }
    };
}
