use criterion::{black_box, criterion_group, criterion_main, Criterion};

use darray::{
	collection::Array,
	policy::{Halving, Retain},
};

fn array_push(c: &mut Criterion) {
	c.bench_function("Array::push_back(100)", |b| {
		b.iter(|| {
			let mut arr = Array::<u32>::new();
			for i in 0..100 {
				arr.push_back(i);
			}
			arr
		})
	});
	c.bench_function("Array::push_back(100) with_capacity", |b| {
		b.iter(|| {
			let mut arr = Array::<u32>::with_capacity(100);
			for i in 0..100 {
				arr.push_back(i);
			}
			arr
		})
	});
	c.bench_function("Vec::push(100)", |b| {
		b.iter(|| {
			let mut arr = Vec::<u32>::new();
			for i in 0..100 {
				arr.push(i);
			}
			arr
		})
	});
}

fn array_push_front(c: &mut Criterion) {
	c.bench_function("Array::push_front(100)", |b| {
		b.iter(|| {
			let mut arr = Array::<u32>::new();
			for i in 0..100 {
				arr.push_front(i);
			}
			arr
		})
	});
	c.bench_function("Vec::insert(0, 100)", |b| {
		b.iter(|| {
			let mut arr = Vec::<u32>::new();
			for i in 0..100 {
				arr.insert(0, i);
			}
			arr
		})
	});
}

fn drain<P: darray::policy::Policy>(mut arr: Array<u32, P>) -> Array<u32, P> {
	while let Ok(value) = arr.pop_back() {
		black_box(value);
	}
	arr
}

fn array_pop(c: &mut Criterion) {
	c.bench_function("Array::pop_back(100) halving", |b| {
		b.iter_batched(
			|| {
				let mut arr = Array::<u32, Halving>::new();
				for i in 0..100 {
					arr.push_back(i);
				}
				arr
			},
			drain,
			criterion::BatchSize::SmallInput,
		)
	});
	c.bench_function("Array::pop_back(100) retain", |b| {
		b.iter_batched(
			|| {
				let mut arr = Array::<u32, Retain>::new();
				for i in 0..100 {
					arr.push_back(i);
				}
				arr
			},
			drain,
			criterion::BatchSize::SmallInput,
		)
	});
}

fn array_index(c: &mut Criterion) {
	let mut arr = Array::<u32>::with_capacity(100);
	for i in 0..100 {
		arr.push_back(i);
	}

	c.bench_function("Array::index(100)", |b| {
		b.iter(|| {
			for i in 0..100 {
				black_box(arr[i]);
			}
		})
	});
	c.bench_function("Array::find(100)", |b| {
		b.iter(|| {
			for i in 0..100 {
				black_box(arr.find(&i));
			}
		})
	});
}

criterion_group!(benches, array_push, array_push_front, array_pop, array_index);
criterion_main!(benches);
