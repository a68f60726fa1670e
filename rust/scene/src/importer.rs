// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Import entry point
//!
//! Drives the kernel through parse, bounds, deflection resolution, and
//! scene assembly. Every failure collapses into a failed [`ImportResult`]
//! at this boundary; nothing panics or propagates past it.

use brep_lite_kernel::{self as kernel, Format, GeometryKernel};
use tracing::debug;

use crate::assembler::SceneAssembler;
use crate::deflection;
use crate::error::{Error, Result};
use crate::options::ImportOptions;
use crate::scene::ImportResult;

/// Imports B-rep documents through a geometry kernel
pub struct Importer<K> {
    kernel: K,
}

impl<K: GeometryKernel> Importer<K> {
    /// Create an importer owning its kernel collaborator
    pub fn new(kernel: K) -> Self {
        Self { kernel }
    }

    /// Access the underlying kernel
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Import a document in a known format
    pub fn import(&self, data: &[u8], format: Format, options: &ImportOptions) -> ImportResult {
        match self.try_import(data, format, options) {
            Ok(result) => result,
            Err(err) => {
                debug!(error = %err, "import failed");
                ImportResult::failed(err.to_string())
            }
        }
    }

    /// Import with the format given by name, as host bindings pass it.
    /// An unrecognized name yields a failed result, never a panic.
    pub fn import_named(&self, data: &[u8], format: &str, options: &ImportOptions) -> ImportResult {
        match Format::from_name(format) {
            Some(known) => self.import(data, known, options),
            None => {
                let err = Error::UnsupportedFormat(format.to_string());
                debug!(error = %err, "import failed");
                ImportResult::failed(err.to_string())
            }
        }
    }

    /// Import a STEP document
    pub fn import_step(&self, data: &[u8], options: &ImportOptions) -> ImportResult {
        self.import(data, Format::Step, options)
    }

    /// Import an IGES document
    pub fn import_iges(&self, data: &[u8], options: &ImportOptions) -> ImportResult {
        self.import(data, Format::Iges, options)
    }

    /// Import a BREP document
    pub fn import_brep(&self, data: &[u8], options: &ImportOptions) -> ImportResult {
        self.import(data, Format::Brep, options)
    }

    fn try_import(
        &self,
        data: &[u8],
        format: Format,
        options: &ImportOptions,
    ) -> Result<ImportResult> {
        let tree = self.kernel.parse(data, format)?;
        if tree.is_empty() {
            return Err(kernel::Error::EmptyDocument.into());
        }

        let bounds = self.kernel.bounding_box(&tree);
        let tolerances = deflection::resolve(options, bounds.as_ref())?;
        debug!(
            linear = tolerances.linear,
            angular = tolerances.angular,
            "resolved deflection"
        );

        let assembler = SceneAssembler::new(&self.kernel, tolerances, options.linear_unit);
        let (meshes, root) = assembler.assemble(&tree);
        Ok(ImportResult::succeeded(meshes, root))
    }
}
