//! Positional correlation of images and links to committed questions.
//!
//! Correlation is index-based, not content-based: the nth committed question
//! gets the nth image and the nth link. On documents where assets are not
//! evenly one-per-question this drifts out of alignment; that is a documented
//! limitation of the source material, not something to second-guess here.

use crate::types::{ImageAsset, Question};

/// Borrows the page-ordered asset lists and hands out one slot per commit.
#[derive(Debug, Clone, Copy)]
pub struct AssetCorrelator<'a> {
    images: &'a [ImageAsset],
    links: &'a [String],
}

impl<'a> AssetCorrelator<'a> {
    /// Create a correlator over the given page-ordered asset lists.
    pub fn new(images: &'a [ImageAsset], links: &'a [String]) -> Self {
        Self { images, links }
    }

    /// Fill the question's image and video link from slot `index`.
    ///
    /// Slots past the end of either list leave the corresponding field
    /// unset; running out of assets is not an error.
    pub fn attach(&self, index: usize, question: &mut Question) {
        if let Some(image) = self.images.get(index) {
            question.image = Some(image.path.clone());
        }

        if let Some(link) = self.links.get(index) {
            question.video_link = Some(link.clone());
        }
    }
}
