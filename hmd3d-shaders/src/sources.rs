/// GLSL ES 1.00 shader sources for the stereo lighting and unwarp passes
///
/// The lighting shaders share one uniform contract: `viewMat`,
/// `projectionMat`, `modelViewMat`, `normalMat`, `material`, `attenuation`,
/// `ambientLightColor`, plus `pointLights[]` / `directionalLights[]` arrays
/// whose sizes are patched in by `with_light_counts` before compilation.

/// Gouraud vertex shader: evaluates the full lighting model per vertex and
/// interpolates the resulting color.
pub const GOURAUD_VERT: &str = r#"
/**
 * varying qualifier is used for passing variables from a vertex shader
 * to a fragment shader. In the fragment shader, these variables are
 * interpolated between neighboring vertexes.
 */
varying vec3 vColor; // Color at a vertex

uniform mat4 viewMat;
uniform mat4 projectionMat;
uniform mat4 modelViewMat;
uniform mat3 normalMat;

struct Material {
	vec3 ambient;
	vec3 diffuse;
	vec3 specular;
	float shininess;
};

uniform Material material;

uniform vec3 attenuation;

uniform vec3 ambientLightColor;

attribute vec3 position;
attribute vec3 normal;

#if NUM_POINT_LIGHTS > 0

	struct PointLight {
		vec3 position;
		vec3 color;
	};

	uniform PointLight pointLights[ NUM_POINT_LIGHTS ];

#endif


void main() {

	vec3 ambientReflection = material.ambient * ambientLightColor;

	vColor = ambientReflection;
	vec4 vertexPosCam4 = modelViewMat * vec4( position, 1.0 );
	vec3 vertexPosCam = vertexPosCam4.xyz / vertexPosCam4.w;
	vec3 normalCam = normalize( normalMat * normal );

	#if NUM_POINT_LIGHTS > 0
	for ( int i = 0; i < NUM_POINT_LIGHTS; i ++ ) {
		vec4 lightPosCam4 = viewMat * vec4( pointLights[ i ].position, 1.0 );
		vec3 lightPosCam = lightPosCam4.xyz / lightPosCam4.w;
		vec3 lightDir = normalize( lightPosCam - vertexPosCam );

		float diffuseTerm = max( dot( lightDir, normalCam ), 0.0 );

		vec3 reflectDir = normalize( - reflect( lightDir, normalCam ) );
		float specularTerm =
			pow( max( dot( reflectDir, normalize( - vertexPosCam ) ), 0.0 ), material.shininess );

		float d = length( lightPosCam - vertexPosCam );
		float falloff = 1.0 / ( 2.0 + 0.0 * d + 0.001 * d * d );

		vColor += falloff * ( material.diffuse * pointLights[ i ].color * diffuseTerm
			+ material.specular * pointLights[ i ].color * specularTerm );
	}
	#endif

	gl_Position =
		projectionMat * modelViewMat * vec4( position, 1.0 );

}
"#;

/// Phong vertex shader: forwards camera-space position and normal for
/// per-fragment lighting.
pub const PHONG_VERT: &str = r#"
varying vec3 normalCam; // Normal in view coordinate
varying vec3 fragPosCam; // Fragment position in view coordinate

uniform mat4 projectionMat;
uniform mat4 modelViewMat;
uniform mat3 normalMat;

attribute vec3 position;
attribute vec3 normal;

void main() {

	vec4 posCam = modelViewMat * vec4( position, 1.0 );
	fragPosCam = posCam.xyz / posCam.w;
	normalCam = normalize( normalMat * normal );

	gl_Position = projectionMat * posCam;

}
"#;

/// Phong fragment shader, point lights only.
pub const PHONG_FRAG: &str = r#"
/**
 * WebGL doesn't set any default precision for fragment shaders.
 * Do not use "lowp". Some mobile browsers don't support it.
 */
precision mediump float;

varying vec3 normalCam; // Normal in view coordinate
varying vec3 fragPosCam; // Fragment position in view coordinate

uniform mat4 viewMat;

struct Material {
	vec3 ambient;
	vec3 diffuse;
	vec3 specular;
	float shininess;
};

uniform Material material;

uniform vec3 attenuation;

uniform vec3 ambientLightColor;

#if NUM_POINT_LIGHTS > 0

	struct PointLight {
		vec3 position;
		vec3 color;
	};

	uniform PointLight pointLights[ NUM_POINT_LIGHTS ];

#endif


void main() {

	vec3 ambientReflection = material.ambient * ambientLightColor;

	vec3 fColor = ambientReflection;
	vec3 n = normalize( normalCam );

	#if NUM_POINT_LIGHTS > 0
	for ( int i = 0; i < NUM_POINT_LIGHTS; i ++ ) {
		vec4 lightPosCam4 = viewMat * vec4( pointLights[ i ].position, 1.0 );
		vec3 lightPosCam = lightPosCam4.xyz / lightPosCam4.w;
		vec3 lightDir = normalize( lightPosCam - fragPosCam );

		float diffuseTerm = max( dot( lightDir, n ), 0.0 );

		vec3 reflectDir = normalize( - reflect( lightDir, n ) );
		float specularTerm =
			pow( max( dot( reflectDir, normalize( - fragPosCam ) ), 0.0 ), material.shininess );

		float d = length( lightPosCam - fragPosCam );
		float falloff = 1.0 / ( 2.0 + 0.0 * d + 0.001 * d * d );

		fColor += falloff * ( material.diffuse * pointLights[ i ].color * diffuseTerm
			+ material.specular * pointLights[ i ].color * specularTerm );
	}
	#endif

	gl_FragColor = vec4( fColor, 1.0 );

}
"#;

/// Phong fragment shader with point and directional lights.
pub const MULTI_PHONG_FRAG: &str = r#"
precision mediump float;

varying vec3 normalCam; // Normal in view coordinate
varying vec3 fragPosCam; // Fragment position in view coordinate

uniform mat4 viewMat;

struct Material {
	vec3 ambient;
	vec3 diffuse;
	vec3 specular;
	float shininess;
};

uniform Material material;

uniform vec3 attenuation;

uniform vec3 ambientLightColor;

#if NUM_POINT_LIGHTS > 0

	struct PointLight {
		vec3 position;
		vec3 color;
	};

	uniform PointLight pointLights[ NUM_POINT_LIGHTS ];

#endif

#if NUM_DIR_LIGHTS > 0

	struct DirectionalLight {
		vec3 direction;
		vec3 color;
	};

	uniform DirectionalLight directionalLights[ NUM_DIR_LIGHTS ];

#endif

void main() {

	vec3 ambientReflection = material.ambient * ambientLightColor;

	vec3 fColor = ambientReflection;
	vec3 n = normalize( normalCam );

	#if NUM_POINT_LIGHTS > 0
	for ( int i = 0; i < NUM_POINT_LIGHTS; i ++ ) {
		vec4 lightPosCam4 = viewMat * vec4( pointLights[ i ].position, 1.0 );
		vec3 lightPosCam = lightPosCam4.xyz / lightPosCam4.w;
		vec3 lightDir = normalize( lightPosCam - fragPosCam );

		float diffuseTerm = max( dot( lightDir, n ), 0.0 );

		vec3 reflectDir = normalize( - reflect( lightDir, n ) );
		float specularTerm =
			pow( max( dot( reflectDir, normalize( - fragPosCam ) ), 0.0 ), material.shininess );

		float d = length( lightPosCam - fragPosCam );
		float falloff = 1.0 / ( 2.0 + 0.0 * d + 0.001 * d * d );

		fColor += falloff * ( material.diffuse * pointLights[ i ].color * diffuseTerm
			+ material.specular * pointLights[ i ].color * specularTerm );
	}
	#endif

	#if NUM_DIR_LIGHTS > 0
	for ( int i = 0; i < NUM_DIR_LIGHTS; i ++ ) {
		vec3 lightDir = normalize( - directionalLights[ i ].direction );

		float diffuseTerm = max( dot( lightDir, n ), 0.0 );
		fColor += material.diffuse * directionalLights[ i ].color * diffuseTerm;

		vec3 reflectDir = normalize( - reflect( lightDir, n ) );
		float specularTerm =
			pow( max( dot( reflectDir, normalize( - fragPosCam ) ), 0.0 ), material.shininess );
		fColor += material.specular * directionalLights[ i ].color * specularTerm;
	}
	#endif

	gl_FragColor = vec4( fColor, 1.0 );

}
"#;

/// Unwarp vertex shader: fullscreen pass-through for the second render
/// pass.
pub const UNWARP_VERT: &str = r#"
varying vec2 textureCoords;

attribute vec3 position;
attribute vec2 uv;

void main() {

	textureCoords = uv;

	gl_Position = vec4( position, 1.0 );

}
"#;

/// Unwarp fragment shader: radial lens-distortion remap of the first-pass
/// texture. Out-of-range samples render black.
pub const UNWARP_FRAG: &str = r#"
precision mediump float;

varying vec2 textureCoords;

// texture rendered in the first rendering pass
uniform sampler2D map;

// center of lens for un-distortion
// in normalized coordinates between 0 and 1
uniform vec2 centerCoordinate;

// [width, height] size of viewport in [mm]
// viewport is the left/right half of the browser window
uniform vec2 viewportSize;

// lens distortion parameters [K_1, K_2]
uniform vec2 K;

// distance between lens and screen in [mm]
uniform float distLensScreen;

void main() {

	vec2 offsetMm = viewportSize * ( textureCoords - centerCoordinate );
	float r = length( offsetMm ) / distLensScreen;

	float factor = 1.0 + K.x * r * r + K.y * pow( r, 4.0 );

	vec2 sampleCoords =
		( textureCoords - centerCoordinate ) * factor + centerCoordinate;

	if ( sampleCoords.x >= 0.0 && sampleCoords.x < 1.0
		&& sampleCoords.y >= 0.0 && sampleCoords.y < 1.0 ) {
		gl_FragColor = texture2D( map, sampleCoords );
	} else {
		gl_FragColor = vec4( 0.0, 0.0, 0.0, 1.0 );
	}

}
"#;
