//! Declaration scenarios: nil pointers, binding, addresses

use crate::cell::ReferenceCell;
use crate::error::Result;
use crate::runner::Probe;

pub(super) fn init(probe: &mut Probe<'_>) -> Result<()> {
    let i: ReferenceCell<i64> = ReferenceCell::nil();
    let hello: ReferenceCell<String> = ReferenceCell::nil();
    let mut p: ReferenceCell<i64> = ReferenceCell::nil();
    probe.check("p starts nil", p.is_nil());

    p = i.alias();
    let hello_ptr = hello.alias();
    probe.info(format!("helloPtr: {:p}", hello_ptr));

    probe.check("p points to i", p.same_cell(&i));
    probe.check("helloPtr points to hello", hello_ptr.same_cell(&hello));
    Ok(())
}

pub(super) fn value_nil(probe: &mut Probe<'_>) -> Result<()> {
    let num = ReferenceCell::with(10i64);
    let mut p: ReferenceCell<i64> = ReferenceCell::nil();

    probe.check("declaration", p.is_nil());

    p = num.alias();
    probe.check("assignment", !p.is_nil());

    let q: ReferenceCell<i64> = ReferenceCell::nil();
    q.write(10);
    probe.check("write", !q.is_nil());
    Ok(())
}

pub(super) fn declaration(probe: &mut Probe<'_>) -> Result<()> {
    let i: ReferenceCell<i64> = ReferenceCell::nil();
    let hello: ReferenceCell<String> = ReferenceCell::nil();
    let mut p: ReferenceCell<i64> = ReferenceCell::nil();
    let unbound = p.alias();

    p = i.alias();
    let hello_ptr = hello.alias();
    probe.info(format!("p:  {:p}\nhelloPtr: {:p}", p, hello_ptr));

    probe.check("p aliases i", p.same_cell(&i));
    probe.check("helloPtr aliases hello", hello_ptr.same_cell(&hello));
    probe.check("rebinding p leaves its old cell behind", !unbound.same_cell(&p));
    probe.check("p sees i's nil state", p.is_nil());
    Ok(())
}

// Informational only: nothing to assert beyond construction succeeding.
#[allow(clippy::approx_constant)]
pub(super) fn show_address(probe: &mut Probe<'_>) -> Result<()> {
    let i = ReferenceCell::with(9i64);
    let hello = ReferenceCell::with(String::from("Hello world"));
    let pi = ReferenceCell::with(3.14f32);
    let b = ReferenceCell::with(true);

    probe.info(format!("Hexadecimal address of 'i' is: {:p}", i));
    probe.info(format!("Hexadecimal address of 'hello' is: {:p}", hello));
    probe.info(format!("Hexadecimal address of 'pi' is: {:p}", pi));
    probe.info(format!("Hexadecimal address of 'b' is: {:p}", b));
    Ok(())
}
