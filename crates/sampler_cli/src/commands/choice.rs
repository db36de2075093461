//! Choice command implementation

use std::io::Write;

use sampler_core::{uniform_choice, UniformSource};
use tracing::info;

use crate::args::split_items;
use crate::Result;

/// Run the choice command
pub fn run<S, W>(items: &[String], source: &mut S, count: usize, out: &mut W) -> Result<()>
where
    S: UniformSource,
    W: Write,
{
    let items = split_items(items);
    info!(items = items.len(), count, "Drawing uniform choices");

    for _ in 0..count {
        writeln!(out, "{}", uniform_choice(&items, source)?)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use sampler_core::{SamplerError, SamplerRng};

    #[test]
    fn test_single_item_repeats() {
        let mut out = Vec::new();
        run(&["only".to_string()], &mut SamplerRng::from_seed(0), 3, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "only\nonly\nonly\n");
    }

    #[test]
    fn test_comma_separated_items() {
        let mut out = Vec::new();
        run(&["a,b,c".to_string()], &mut SamplerRng::from_seed(4), 50, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().all(|line| ["a", "b", "c"].contains(&line)));
    }

    #[test]
    fn test_blank_items_rejected() {
        let mut out = Vec::new();
        let result = run(&[",".to_string()], &mut SamplerRng::from_seed(0), 1, &mut out);
        assert!(matches!(
            result,
            Err(CliError::Sampler(SamplerError::InvalidParameter { name: "collection", .. }))
        ));
    }

    #[test]
    fn test_zero_count_skips_validation() {
        let mut out = Vec::new();
        run(&[], &mut SamplerRng::from_seed(0), 0, &mut out).unwrap();
        assert!(out.is_empty());
    }
}
