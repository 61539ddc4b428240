//! Access scenarios: reading and writing through pointers

use crate::cell::ReferenceCell;
use crate::error::Result;
use crate::runner::Probe;

pub(super) fn access_1(probe: &mut Probe<'_>) -> Result<()> {
    let hello = ReferenceCell::with(String::from("Hello, mina-san!"));

    let mut hello_ptr: ReferenceCell<String> = ReferenceCell::nil();
    probe.check("helloPtr starts nil", hello_ptr.is_nil());
    hello_ptr = hello.alias();

    let i = ReferenceCell::with(6i64);
    let i_ptr = i.alias();

    probe.check_eq("the string \"hello\"", "Hello, mina-san!", hello.read()?.as_str());
    probe.check_eq(
        "the string pointed to by \"helloPtr\"",
        "Hello, mina-san!",
        hello_ptr.read()?.as_str(),
    );
    probe.check_eq("the value of \"i\"", 6, i.read()?);
    probe.check_eq("the value pointed to by \"iPtr\"", 6, i_ptr.read()?);

    // A plain copy is detached from the cell it came from
    let plain = i.copy_value()?;
    i_ptr.write(7);
    probe.check_eq("write through \"iPtr\" reaches \"i\"", 7, i.read()?);
    probe.check_eq("plain copy of \"i\"", 6, plain);
    Ok(())
}

pub(super) fn access_2(probe: &mut Probe<'_>) -> Result<()> {
    let x = ReferenceCell::with(3i64);
    let y = x.alias();

    y.increment()?;
    probe.check_eq("x after first increment", 4, x.read()?);

    y.increment()?;
    probe.check_eq("x after second increment", 5, x.read()?);
    Ok(())
}

pub(super) fn allocation(probe: &mut Probe<'_>) -> Result<()> {
    let mut sum = 0i64;
    let double_sum: ReferenceCell<i64> = ReferenceCell::nil();
    for i in 0..10 {
        sum += i;
    }

    // new(int): fresh storage holding the zero value
    double_sum.write(0);
    double_sum.write(sum * 2);

    probe.check_eq("the sum of numbers from 0 to 10", 45, sum);
    probe.check_eq("the double of this sum", 90, double_sum.read()?);
    Ok(())
}
