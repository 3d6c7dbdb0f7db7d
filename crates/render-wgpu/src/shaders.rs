/// WGSL shader for instanced spheres and the ground plane, lit by a ring of
/// point lights with inverse-square falloff.
pub const SCENE_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    camera_pos: vec3<f32>,
    light_count: u32,
    // xyz = light position, w = intensity
    lights: array<vec4<f32>, 10>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct InstanceInput {
    @location(2) model_0: vec4<f32>,
    @location(3) model_1: vec4<f32>,
    @location(4) model_2: vec4<f32>,
    @location(5) model_3: vec4<f32>,
    @location(6) color: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) color: vec4<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let model = mat4x4<f32>(
        instance.model_0,
        instance.model_1,
        instance.model_2,
        instance.model_3,
    );
    let world_pos = model * vec4<f32>(vertex.position, 1.0);
    let world_normal = (model * vec4<f32>(vertex.normal, 0.0)).xyz;

    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * world_pos;
    out.world_pos = world_pos.xyz;
    out.world_normal = normalize(world_normal);
    out.color = instance.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let n = normalize(in.world_normal);
    var lighting = 0.15; // ambient floor
    for (var i = 0u; i < uniforms.light_count; i = i + 1u) {
        let to_light = uniforms.lights[i].xyz - in.world_pos;
        let dist_sq = max(dot(to_light, to_light), 0.01);
        let atten = uniforms.lights[i].w / dist_sq;
        lighting = lighting + max(dot(n, normalize(to_light)), 0.0) * atten;
    }
    // Soft rolloff so high intensities saturate instead of clipping.
    let exposure = lighting / (lighting + 1.0);
    return vec4<f32>(in.color.rgb * exposure * 1.8, in.color.a);
}
"#;
