//! Drive the builder API end to end: declare inputs, validate a few
//! operations, and show how rejections surface.

use anyhow::Result;

use neurograph_builder::{GemmOptions, GraphBuilder, Resample2dOptions};
use neurograph_ir::{DataType, OperandDescriptor};

fn main() -> Result<()> {
    let builder = GraphBuilder::new();

    let a = builder.input("a", OperandDescriptor::new(DataType::Float32, vec![2, 3]));
    let b = builder.input("b", OperandDescriptor::new(DataType::Float32, vec![3, 4]));
    let product = builder.gemm(&a, &b, GemmOptions::default())?;
    println!(
        "gemm([2, 3], [3, 4]) -> {} {:?}",
        product.data_type(),
        product.shape()
    );

    let image = builder.input(
        "image",
        OperandDescriptor::new(DataType::Float32, vec![1, 1, 2, 4]),
    );
    let upscaled = builder.resample2d(
        &image,
        Resample2dOptions {
            scales: Some(vec![2.0, 2.0]),
            ..Resample2dOptions::default()
        },
    )?;
    println!("resample2d x2 -> {:?}", upscaled.shape());

    // A shape error is reported, not executed.
    let bad = builder.input("bad", OperandDescriptor::new(DataType::Float32, vec![2, 4]));
    match builder.gemm(&a, &bad, GemmOptions::default()) {
        Ok(_) => unreachable!("2x3 . 2x4 must not validate"),
        Err(err) => println!("rejected as expected: {err}"),
    }

    // Operands never cross builder sessions.
    let other = GraphBuilder::new();
    let foreign = other.input("x", OperandDescriptor::new(DataType::Float32, vec![2, 3]));
    match builder.abs(&foreign) {
        Ok(_) => unreachable!("foreign operands must not validate"),
        Err(err) => println!("rejected as expected: {err}"),
    }

    Ok(())
}
