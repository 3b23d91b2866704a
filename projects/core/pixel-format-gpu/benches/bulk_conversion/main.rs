use core::alloc::Layout;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use pixel_format_gpu::{bulk_pixel_conversion, get_bytes_per_pixel, PixelFormatGpu, TextureBox};
use safe_allocator_api::RawAlloc;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

const WIDTH: u32 = 2048;
const HEIGHT: u32 = 1024;

pub(crate) fn allocate_align_64(num_bytes: usize) -> RawAlloc {
    let layout = Layout::from_size_align(num_bytes, 64).unwrap();
    RawAlloc::new(layout).unwrap()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bulk Pixel Conversion (2048x1024)");

    // (source, destination, vertical flip)
    let cases = [
        (PixelFormatGpu::Rgba8Unorm, PixelFormatGpu::Rgba8Unorm, false),
        (PixelFormatGpu::Rgba8Unorm, PixelFormatGpu::Rgba8Unorm, true),
        (PixelFormatGpu::Rgba8Unorm, PixelFormatGpu::Bgra8Unorm, false),
        (PixelFormatGpu::Rgba8Unorm, PixelFormatGpu::Rg8Snorm, false),
        (PixelFormatGpu::Rgba8Unorm, PixelFormatGpu::Rgba16Float, false),
        (PixelFormatGpu::Rgba8UnormSrgb, PixelFormatGpu::Rgba32Float, false),
        (PixelFormatGpu::R10g10b10a2Unorm, PixelFormatGpu::Rgba8Unorm, false),
    ];

    for (src_format, dst_format, vertical_flip) in cases {
        let src_box = TextureBox::for_format(WIDTH, HEIGHT, 1, 1, src_format);
        let dst_box = TextureBox::for_format(WIDTH, HEIGHT, 1, 1, dst_format);
        let mut input = allocate_align_64(src_box.required_len().unwrap());
        let mut output = allocate_align_64(dst_box.required_len().unwrap());

        // Fill with a simple repeating pattern.
        for (i, byte) in input.as_mut_slice().iter_mut().enumerate() {
            *byte = (i % 251) as u8;
        }

        let src = src_box.with_data(input.as_mut_ptr());
        let mut dst = dst_box.with_data(output.as_mut_ptr());
        let name = format!(
            "{src_format} -> {dst_format}{}",
            if vertical_flip { " (flipped)" } else { "" }
        );

        group.throughput(Throughput::Bytes(
            (WIDTH * HEIGHT * get_bytes_per_pixel(src_format)) as u64,
        ));
        group.bench_function(name, |b| {
            b.iter(|| unsafe {
                bulk_pixel_conversion(&src, src_format, &mut dst, dst_format, vertical_flip)
            })
        });
    }

    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
