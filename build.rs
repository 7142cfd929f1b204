// Generates the PetService server/client stubs. The message types are written
// by hand with prost derives in `src/dtos/pet.rs`, so no `.proto` file or protoc
// is needed.
fn main() {
    let method = |name: &str, route: &str, input: &str, output: &str| {
        tonic_build::manual::Method::builder()
            .name(name)
            .route_name(route)
            .input_type(input)
            .output_type(output)
            .codec_path("tonic::codec::ProstCodec")
            .build()
    };

    let service = tonic_build::manual::Service::builder()
        .name("PetService")
        .package("pet")
        .method(method(
            "create",
            "Create",
            "crate::dtos::CreatePetRequest",
            "crate::dtos::PetResponse",
        ))
        .method(method(
            "update",
            "Update",
            "crate::dtos::UpdatePetRequest",
            "crate::dtos::PetResponse",
        ))
        .method(method(
            "get",
            "Get",
            "crate::dtos::GetPetRequest",
            "crate::dtos::PetResponse",
        ))
        .method(method(
            "delete",
            "Delete",
            "crate::dtos::DeletePetRequest",
            "crate::dtos::DeletePetResponse",
        ))
        .build();

    tonic_build::manual::Builder::new().compile(&[service]);
}
