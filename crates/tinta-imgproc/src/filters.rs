use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tinta_image::{ImageError, Rgb8Image};

use crate::{color, filter, flip};

/// Errors that can occur when selecting a filter.
#[derive(Error, Debug, PartialEq)]
pub enum FilterError {
    /// The name does not match any filter.
    #[error("unknown filter '{0}', expected one of grayscale, reflect, blur, edges")]
    UnknownFilter(String),
}

/// The filters that can be applied to an RGB8 image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    /// Replace every channel with the mean of the three channels.
    Grayscale,
    /// Mirror the image horizontally.
    Reflect,
    /// Average every pixel with its 3x3 neighborhood.
    Blur,
    /// Sobel edge magnitude per channel.
    Edges,
}

impl Filter {
    /// All filters, in the order they are listed to users.
    pub const ALL: [Filter; 4] = [
        Filter::Grayscale,
        Filter::Reflect,
        Filter::Blur,
        Filter::Edges,
    ];

    /// The canonical name of the filter.
    pub fn name(self) -> &'static str {
        match self {
            Filter::Grayscale => "grayscale",
            Filter::Reflect => "reflect",
            Filter::Blur => "blur",
            Filter::Edges => "edges",
        }
    }

    /// Apply the filter to the image in place.
    ///
    /// # Errors
    ///
    /// Blur and edges return [`ImageError::AllocationFailed`] if their
    /// temporary image cannot be allocated; the image is then unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use tinta_image::Image;
    /// use tinta_imgproc::filters::Filter;
    ///
    /// let mut image = Image::<u8, 3>::from_rows(vec![vec![[1, 2, 3], [4, 5, 6]]]).unwrap();
    ///
    /// let filter: Filter = "r".parse().unwrap();
    /// filter.apply(&mut image).unwrap();
    ///
    /// assert_eq!(image.as_slice(), &[4, 5, 6, 1, 2, 3]);
    /// ```
    pub fn apply(self, image: &mut Rgb8Image) -> Result<(), ImageError> {
        log::debug!("applying {} filter", self);

        match self {
            Filter::Grayscale => color::grayscale(image),
            Filter::Reflect => flip::reflect(image),
            Filter::Blur => filter::box_blur3(image)?,
            Filter::Edges => filter::sobel_edges(image)?,
        }

        Ok(())
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Filter {
    type Err = FilterError;

    /// Parse a filter from its name or its first letter, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grayscale" | "g" => Ok(Filter::Grayscale),
            "reflect" | "r" => Ok(Filter::Reflect),
            "blur" | "b" => Ok(Filter::Blur),
            "edges" | "e" => Ok(Filter::Edges),
            _ => Err(FilterError::UnknownFilter(s.to_string())),
        }
    }
}
