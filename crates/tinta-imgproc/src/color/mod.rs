mod gray;

pub use gray::grayscale;
