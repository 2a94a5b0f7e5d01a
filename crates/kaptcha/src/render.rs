//! `render`: serve one captcha into a file.

use std::{
    fs::File,
    io::{BufWriter, Write},
};

use kaptcha_service::{CaptchaService, MemorySession, Response};
use tracing::{debug, info};

use crate::{cli::RenderArgs, error::Result, source};

/// [`Response`] whose body is a buffered file; headers are only logged.
struct FileResponse {
    /// Output file.
    out: BufWriter<File>,
}

impl Response for FileResponse {
    fn set_header(&mut self, name: &str, value: &str) {
        debug!(name, value, "response header");
    }

    fn set_content_type(&mut self, content_type: &str) {
        debug!(content_type, "response content type");
    }

    fn body(&mut self) -> &mut dyn Write {
        &mut self.out
    }
}

/// Render a captcha to `args.out` and print its answer on stdout.
pub fn run(args: &RenderArgs) -> Result<()> {
    let store = source::load(&args.source)?;
    let service = CaptchaService::new(&store)?;

    let mut response = FileResponse {
        out: BufWriter::new(File::create(&args.out)?),
    };
    let mut session = MemorySession::new();
    let text = service.serve(&mut session, &mut response)?;

    info!(path = %args.out.display(), "captcha written");
    println!("{text}");
    Ok(())
}
