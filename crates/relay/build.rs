//! Generates the `hook.SendMessage` client and server stubs.
//!
//! The message types are hand-written prost structs in `src/proto.rs`, so the
//! service is described with tonic-build's manual builder and no `protoc` is
//! needed at build time.

fn main() {
    let send_message = tonic_build::manual::Method::builder()
        .name("send_message")
        .route_name("SendMessage")
        .input_type("crate::proto::Message")
        .output_type("crate::proto::Empty")
        .codec_path("tonic::codec::ProstCodec")
        .build();

    let service = tonic_build::manual::Service::builder()
        .name("SendMessage")
        .package("hook")
        .method(send_message)
        .build();

    tonic_build::manual::Builder::new().compile(&[service]);

    println!("cargo:rerun-if-changed=build.rs");
}
