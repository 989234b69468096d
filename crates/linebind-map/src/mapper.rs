//! The public line-mapping entry point.

use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;

use linebind_ingest::{IngestError, LineSource};
use linebind_model::{Reflect, TypeDescriptor};

use crate::builder::ObjectBuilder;
use crate::error::{MapError, Result};
use crate::options::MapperOptions;
use crate::resolve::DescriptorCache;

/// Maps delimited lines onto [`Reflect`] types.
///
/// A mapper owns (or shares) one [`DescriptorCache`]; clones share it too.
/// Mapping is synchronous and performs no I/O except in
/// [`parse_reader`](Self::parse_reader) and [`parse_file`](Self::parse_file).
///
/// # Example
///
/// ```ignore
/// let mapper = LineMapper::new();
/// let point: Point = mapper.parse_line("3,4")?;
/// let points: Vec<Point> = mapper.parse_all(["1,2", "3,4"])?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct LineMapper {
    cache: Arc<DescriptorCache>,
    options: MapperOptions,
}

impl LineMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: MapperOptions) -> Self {
        Self {
            cache: Arc::default(),
            options,
        }
    }

    /// Creates a mapper on top of an existing cache.
    pub fn with_cache(cache: Arc<DescriptorCache>, options: MapperOptions) -> Self {
        Self { cache, options }
    }

    pub fn options(&self) -> &MapperOptions {
        &self.options
    }

    pub fn cache(&self) -> &Arc<DescriptorCache> {
        &self.cache
    }

    /// Resolves (or fetches) the descriptor for `T`.
    pub fn descriptor<T: Reflect>(&self) -> Result<Arc<TypeDescriptor>> {
        self.cache.resolve::<T>()
    }

    /// Maps one line onto a new `T`.
    ///
    /// The type is resolved before the line is looked at, so an unmappable
    /// type fails without tokenizing anything.
    pub fn parse_line<T: Reflect>(&self, line: &str) -> Result<T> {
        let descriptor = self.descriptor::<T>()?;
        self.map_line(line, &descriptor)
    }

    /// Maps every line, resolving `T` once up front.
    ///
    /// Stops at the first line that fails and returns its error.
    pub fn parse_all<T, I>(&self, lines: I) -> Result<Vec<T>>
    where
        T: Reflect,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.parse_source(lines.into_iter().map(Ok::<_, IngestError>))
    }

    /// Maps every line produced by a fallible line source.
    ///
    /// A source failure aborts the batch as [`MapError::Source`].
    pub fn parse_source<T, I, S>(&self, lines: I) -> Result<Vec<T>>
    where
        T: Reflect,
        I: IntoIterator<Item = std::result::Result<S, IngestError>>,
        S: AsRef<str>,
    {
        let descriptor = self.descriptor::<T>()?;
        let lines = lines.into_iter();
        let mut objects = Vec::with_capacity(lines.size_hint().0);

        for (index, line) in lines.enumerate() {
            let line = line?;
            let object = self
                .map_line(line.as_ref(), &descriptor)
                .inspect_err(|err| {
                    tracing::debug!(
                        type_name = descriptor.type_name,
                        line_number = index + 1,
                        error = %err,
                        "Line failed to map"
                    );
                })?;
            objects.push(object);
        }

        Ok(objects)
    }

    /// Maps every line of a buffered reader.
    pub fn parse_reader<T: Reflect, R: BufRead>(&self, reader: R) -> Result<Vec<T>> {
        self.parse_source(LineSource::new(reader))
    }

    /// Maps every line of a file.
    pub fn parse_file<T: Reflect>(&self, path: impl AsRef<Path>) -> Result<Vec<T>> {
        let path = path.as_ref();
        let descriptor = self.descriptor::<T>()?;
        let objects = self.parse_source(LineSource::open(path)?)?;
        tracing::info!(
            path = %path.display(),
            type_name = descriptor.type_name,
            count = objects.len(),
            "Mapped file"
        );
        Ok(objects)
    }

    fn map_line<T: Reflect>(&self, line: &str, descriptor: &TypeDescriptor) -> Result<T> {
        let tokens = self.options.tokenizer(descriptor.separator).tokenize(line)?;
        tracing::trace!(
            type_name = descriptor.type_name,
            tokens = tokens.len(),
            "Mapping line"
        );
        let object = ObjectBuilder::new(&self.cache, &self.options).build(&tokens, descriptor)?;
        object
            .downcast::<T>()
            .map(|object| *object)
            .map_err(|_| MapError::Instantiation {
                type_name: descriptor.type_name,
                reason: "constructor produced a different type".to_string(),
            })
    }
}
