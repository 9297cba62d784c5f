use griotte::*;

fn describe<T: Unit>(name: &str, path: &Path<T>) {
	println!("{} ({} entries):", name, path.len());
	for segment in path.segments() {
		match segment {
			Ok(segment) => println!("    {:?}", segment),
			Err(e) => println!("    error: {}", e),
		}
	}
}

fn main() {
	// rounded square, integer units
	let mut p = IntPath::starting_at((20, 0));
	p.hline_to(80);
	p.quad_to((100, 0), (100, 20));
	p.vline_to(80);
	p.quad_to((100, 100), (80, 100));
	p.hline_to(20);
	p.quad_to((0, 100), (0, 80));
	p.vline_to(20);
	p.quad_to((0, 0), (20, 0));
	p.close_path();
	describe("rounded square", &p);
	p.log_entries();

	// the same outline with relative commands, floating-point units
	let mut q = FloatPath::starting_at((20.0, 0.0));
	q.rel_hline_to(60.0);
	q.rel_quad_to((20.0, 0.0), (20.0, 20.0));
	q.rel_vline_to(60.0);
	q.rel_quad_to((0.0, 20.0), (-20.0, 20.0));
	q.rel_hline_to(-60.0);
	q.rel_quad_to((-20.0, 0.0), (-20.0, -20.0));
	q.rel_vline_to(-60.0);
	q.rel_quad_to((0.0, -20.0), (20.0, -20.0));
	q.close_path();
	describe("relative rounded square", &q);

	for curve in q.cubic_curves().flatten() {
		println!("curve {:?} -> {:?}", curve.start, curve.end);
	}

	let mut pen = Pen::new(rgb::RGBA8::new(0, 0, 0, 255), 2.0f32, CapStyle::Round);
	pen.add_dash(4.0);
	pen.add_dash(2.0);
	println!("pen: {:?}", pen);
}
