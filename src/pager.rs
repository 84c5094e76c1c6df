//! Pager
//!
//! Owns the open database file and mediates every page-granularity read
//! and write between memory and disk.
//!
//! ## Responsibilities
//! - Map page numbers to fixed-size in-memory page buffers
//! - Load pages from disk on first access
//! - Allocate zeroed pages past the end of the file
//! - Persist all resident pages on close
//!
//! Pages are never evicted once loaded, and every write is a full
//! `PAGE_SIZE` block so page boundaries stay byte-exact on disk. The pager
//! never inspects page contents; interpretation belongs to the node codec.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::constants::{PAGE_SIZE, TABLE_MAX_PAGES};
use crate::error::{DbError, Result};

/// One resident page buffer.
pub type Page = Box<[u8; PAGE_SIZE]>;

/// The page cache over one database file.
pub struct Pager {
    file: File,
    /// File length at open time; always a whole multiple of `PAGE_SIZE`.
    file_length: u64,
    /// Number of pages the table logically spans (on disk or allocated).
    num_pages: usize,
    /// Resident pages, indexed by page number. `None` = not yet loaded.
    pages: Vec<Option<Page>>,
}

impl Pager {
    /// Open the backing file, creating it if absent.
    ///
    /// Fails if the existing file's length is not a whole multiple of
    /// `PAGE_SIZE`; such a file was not written by this pager.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(path)?;

        let file_length = file.metadata()?.len();
        if file_length % PAGE_SIZE as u64 != 0 {
            return Err(DbError::Corrupt(format!(
                "{} has length {} which is not a whole number of pages",
                path.display(),
                file_length
            )));
        }

        let num_pages = (file_length / PAGE_SIZE as u64) as usize;

        tracing::debug!(
            target: "leafdb::pager",
            path = %path.display(),
            file_length,
            num_pages,
            "opened database file"
        );

        let mut pages = Vec::with_capacity(TABLE_MAX_PAGES);
        pages.resize_with(TABLE_MAX_PAGES, || None);

        Ok(Self {
            file,
            file_length,
            num_pages,
            pages,
        })
    }

    /// Number of pages the table currently spans.
    pub fn num_pages(&self) -> usize {
        self.num_pages
    }

    /// Fetch a page buffer, loading it from disk on first access.
    ///
    /// A page number at or past the end of the file yields a zeroed buffer
    /// and extends the logical page count; the bytes reach disk at the
    /// next flush.
    pub fn get_page(&mut self, page_num: usize) -> Result<&mut [u8; PAGE_SIZE]> {
        if page_num >= TABLE_MAX_PAGES {
            return Err(DbError::PageOutOfBounds(page_num));
        }

        if self.pages[page_num].is_none() {
            let mut page: Page = Box::new([0u8; PAGE_SIZE]);

            // Pages within the on-disk range are read back in full; the
            // file length is always page-aligned so a short read is an
            // I/O failure, not an expected condition.
            let pages_on_disk = (self.file_length / PAGE_SIZE as u64) as usize;
            if page_num < pages_on_disk {
                self.file
                    .seek(SeekFrom::Start((page_num * PAGE_SIZE) as u64))?;
                self.file.read_exact(&mut page[..])?;
                tracing::trace!(target: "leafdb::pager", page_num, "loaded page from disk");
            } else {
                tracing::trace!(target: "leafdb::pager", page_num, "allocated fresh page");
            }

            self.pages[page_num] = Some(page);
            if page_num >= self.num_pages {
                self.num_pages = page_num + 1;
            }
        }

        let page = self.pages[page_num].as_mut().expect("page is resident");
        Ok(&mut **page)
    }

    /// Write one resident page back to its file offset, as a whole block.
    pub fn flush(&mut self, page_num: usize) -> Result<()> {
        if page_num >= TABLE_MAX_PAGES {
            return Err(DbError::PageOutOfBounds(page_num));
        }

        let page = match &self.pages[page_num] {
            Some(p) => p,
            None => {
                // A page that was never loaded was never mutated.
                return Ok(());
            }
        };

        self.file
            .seek(SeekFrom::Start((page_num * PAGE_SIZE) as u64))?;
        self.file.write_all(&page[..])?;
        tracing::trace!(target: "leafdb::pager", page_num, "flushed page");

        Ok(())
    }

    /// Flush every resident page and sync the file.
    pub fn close(&mut self) -> Result<()> {
        let mut flushed = 0usize;
        for page_num in 0..self.num_pages {
            if self.pages[page_num].is_some() {
                self.flush(page_num)?;
                flushed += 1;
            }
        }
        self.file.sync_all()?;

        tracing::debug!(target: "leafdb::pager", flushed, "closed database file");
        Ok(())
    }
}
