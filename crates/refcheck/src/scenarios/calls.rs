//! Call scenarios: pass-by-value, pass-by-reference, closure capture

use crate::cell::ReferenceCell;
use crate::error::Result;
use crate::runner::Probe;

pub(super) fn parameter_by_value(probe: &mut Probe<'_>) -> Result<()> {
    // Returns 1 plus its input
    fn add(mut v: i64) -> i64 {
        v += 1;
        v
    }

    let x = 3i64;
    let x1 = add(x);

    probe.check_eq("x+1", 4, x1);
    probe.check_eq("x", 3, x);

    let cell = ReferenceCell::with(3i64);
    let c1 = add(cell.copy_value()?);
    probe.check_eq("copy of cell + 1", 4, c1);
    probe.check_eq("cell after call", 3, cell.read()?);
    Ok(())
}

pub(super) fn by_reference_1(probe: &mut Probe<'_>) -> Result<()> {
    fn add(v: ReferenceCell<i64>) -> Result<i64> {
        v.write(v.read()? + 1);
        v.read()
    }

    let x = ReferenceCell::with(3i64);

    let x1 = add(x.alias())?;
    probe.check_eq("x+1", 4, x1);
    probe.check_eq("x", 4, x.read()?);

    let x1 = add(x.alias())?;
    probe.check_eq("x+1", 5, x1);
    probe.check_eq("x", 5, x.read()?);
    Ok(())
}

pub(super) fn by_reference_2(probe: &mut Probe<'_>) -> Result<()> {
    fn add(v: ReferenceCell<i64>, i: i64) -> Result<()> {
        v.increment_by(i)?;
        Ok(())
    }

    let value = ReferenceCell::with(6i64);
    let incr = 1;

    add(value.alias(), incr)?;
    probe.check_eq("value", 7, value.read()?);

    add(value.alias(), incr)?;
    probe.check_eq("value", 8, value.read()?);
    Ok(())
}

pub(super) fn by_reference_3(probe: &mut Probe<'_>) -> Result<()> {
    let x = ReferenceCell::with(3i64);
    let f = {
        let x = x.alias();
        move || x.write(4)
    };
    let y = x.alias();

    f();
    probe.check_eq("y", 4, y.read()?);
    probe.check_eq("x", 4, x.read()?);
    probe.check("y aliases x", y.same_cell(&x));
    Ok(())
}
