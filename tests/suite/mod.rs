mod binaries;
mod kernels;
