use crate::error::Result;
use crate::ssao::SAMPLING_TABLE_VERSION;
use crate::ssao::settings::SsaoTables;
use std::io::Write;

/// Writes the kernel constants as text, one `x y z w` row per sample.
///
/// The first line records the table version so a baked file can be matched
/// against the generator that produced it.
pub fn write_kernel_table<W: Write>(tables: &SsaoTables, mut writer: W) -> Result<()> {
    writeln!(
        writer,
        "# ssao kernel v{} ({} samples)",
        SAMPLING_TABLE_VERSION,
        tables.kernel.len()
    )?;
    for [x, y, z, w] in tables.kernel_constants() {
        writeln!(writer, "{:.8} {:.8} {:.8} {:.8}", x, y, z, w)?;
    }
    Ok(())
}
