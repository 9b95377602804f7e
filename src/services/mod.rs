pub mod assembler;
pub mod capture;
pub mod extractor;
pub mod loader;
pub mod renderer;

pub use assembler::{strip_leading_heading, DocumentAssembler};
pub use capture::ScreenshotCapture;
pub use extractor::{ExtractionStrategy, LopdfStrategy, PdfExtractStrategy, PdfExtractor};
pub use loader::ContentLoader;
pub use renderer::HtmlRenderer;
